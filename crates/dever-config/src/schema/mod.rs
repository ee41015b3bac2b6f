//! Configuration schema types for Dev-ER.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod links;
mod logging;
mod paths;
mod window;
mod workspace;

pub use links::*;
pub use logging::*;
pub use paths::*;
pub use window::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeverConfig {
    pub window: WindowConfig,
    pub workspace: WorkspaceConfig,
    pub links: LinksConfig,
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}
