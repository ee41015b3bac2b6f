//! Embedded workspace view configuration.

use serde::{Deserialize, Serialize};

/// Toolbar height assumed for the panel slot before the UI has measured it.
pub const DEFAULT_PANEL_TOOLBAR_HEIGHT: u32 = 40;
/// Toolbar height assumed for the modal slot before the UI has measured it.
pub const DEFAULT_MODAL_TOOLBAR_HEIGHT: u32 = 48;

/// Settings for the embedded portal surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Portal URL the UI opens in the panel slot.
    pub home_url: String,
    pub panel_toolbar_height: u32,
    pub modal_toolbar_height: u32,
    pub user_agent: Option<String>,
    pub devtools: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            home_url: "https://portal.dever.app/".into(),
            panel_toolbar_height: DEFAULT_PANEL_TOOLBAR_HEIGHT,
            modal_toolbar_height: DEFAULT_MODAL_TOOLBAR_HEIGHT,
            user_agent: None,
            devtools: cfg!(debug_assertions),
        }
    }
}
