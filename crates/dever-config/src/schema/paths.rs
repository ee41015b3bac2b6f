//! On-disk resource locations served to the UI layer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resource directories. Empty entries resolve against the platform data dir.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    pub public: Option<PathBuf>,
    pub sdk_resources: Option<PathBuf>,
    pub logs: Option<PathBuf>,
    /// Bundled main UI served over `dever://`. Defaults to `ui/` next to
    /// the executable.
    pub ui: Option<PathBuf>,
}
