//! Reading `config.toml`, writing the first-run template, and replacing
//! invalid values with defaults.

mod template;


use std::path::{Path, PathBuf};

use dever_common::ConfigError;
use tracing::{info, warn};

use crate::schema::DeverConfig;
use crate::validation;

/// Platform config file, e.g. `~/.config/dever/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("dever").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Load `path`, or the platform default when `None`.
///
/// A missing default file is created from the template first; a missing
/// explicit path is `FileNotFound`. Each value that fails validation is
/// reset to its default and logged; the rest of the file is kept.
pub fn load(path: Option<&Path>) -> Result<DeverConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                write_template(&p)?;
            }
            p
        }
    };

    let mut config = parse_file(&path)?;
    if let Err(e) = validation::repair(&mut config) {
        warn!(path = %path.display(), "{e}; using defaults for those values");
    }
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Deserialize `path` as-is, without validation.
pub fn parse_file(path: &Path) -> Result<DeverConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;
    toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse {}: {e}", path.display())))
}

/// Write the commented template to `path`, creating parent directories.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    let write = |p: &Path| -> std::io::Result<()> {
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(p, template::default_config_toml())
    };
    write(path).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;
    info!(path = %path.display(), "created default config");
    Ok(())
}
