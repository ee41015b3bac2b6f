//! Dev-ER configuration system.
//!
//! TOML configuration at the platform config directory. Every section has
//! defaults so partial configs work out of the box.

pub mod data_paths;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use data_paths::{DataPathKey, DataPaths};
pub use schema::{DeverConfig, InPlacePolicy, LinkRoute};

use std::path::Path;

use dever_common::ConfigError;

/// Load config from an explicit path override, or the default location.
/// Invalid values come back replaced by their defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<DeverConfig, ConfigError> {
    toml_loader::load(path)
}
