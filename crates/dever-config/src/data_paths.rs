//! Synchronous resource path lookup for the UI layer.
//!
//! Paths are resolved once when the config is loaded so a lookup is a plain
//! field read with no filesystem access.

use std::path::{Path, PathBuf};

use crate::schema::PathsConfig;

/// Keys the UI layer may ask for. Unknown keys map to `Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPathKey {
    Public,
    SdkResources,
    Logs,
}

impl DataPathKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "sdkResources" => Self::SdkResources,
            "logsPath" => Self::Logs,
            _ => Self::Public,
        }
    }
}

/// Resolved resource directories.
#[derive(Debug, Clone)]
pub struct DataPaths {
    public: PathBuf,
    sdk_resources: PathBuf,
    logs: PathBuf,
}

impl DataPaths {
    /// Resolve configured paths, filling gaps under `base`.
    pub fn resolve(config: &PathsConfig, base: &Path) -> Self {
        Self {
            public: config.public.clone().unwrap_or_else(|| base.join("public")),
            sdk_resources: config
                .sdk_resources
                .clone()
                .unwrap_or_else(|| base.join("sdk_resources")),
            logs: config.logs.clone().unwrap_or_else(|| base.join("logs")),
        }
    }

    /// Resolve against the platform data directory (`~/.local/share/dever`).
    pub fn from_config(config: &PathsConfig) -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("dever");
        Self::resolve(config, &base)
    }

    pub fn get(&self, key: DataPathKey) -> &Path {
        match key {
            DataPathKey::Public => &self.public,
            DataPathKey::SdkResources => &self.sdk_resources,
            DataPathKey::Logs => &self.logs,
        }
    }

    /// Lookup by the wire key the UI layer sends.
    pub fn lookup(&self, key: &str) -> &Path {
        self.get(DataPathKey::parse(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_parsing() {
        assert_eq!(DataPathKey::parse("public"), DataPathKey::Public);
        assert_eq!(DataPathKey::parse("sdkResources"), DataPathKey::SdkResources);
        assert_eq!(DataPathKey::parse("logsPath"), DataPathKey::Logs);
    }

    #[test]
    fn unknown_key_falls_back_to_public() {
        assert_eq!(DataPathKey::parse("secrets"), DataPathKey::Public);
        assert_eq!(DataPathKey::parse(""), DataPathKey::Public);
    }

    #[test]
    fn resolve_fills_missing_under_base() {
        let paths = DataPaths::resolve(&PathsConfig::default(), Path::new("/data/dever"));
        assert_eq!(paths.lookup("public"), Path::new("/data/dever/public"));
        assert_eq!(
            paths.lookup("sdkResources"),
            Path::new("/data/dever/sdk_resources")
        );
        assert_eq!(paths.lookup("logsPath"), Path::new("/data/dever/logs"));
    }

    #[test]
    fn resolve_keeps_configured_paths() {
        let config = PathsConfig {
            logs: Some(PathBuf::from("/var/log/dever")),
            ..Default::default()
        };
        let paths = DataPaths::resolve(&config, Path::new("/data/dever"));
        assert_eq!(paths.get(DataPathKey::Logs), Path::new("/var/log/dever"));
        assert_eq!(paths.lookup("unknown"), Path::new("/data/dever/public"));
    }
}
