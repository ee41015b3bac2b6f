//! Host window configuration types.

use serde::{Deserialize, Serialize};

/// Host window size and close behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Closing the window hides it instead of quitting, unless a force
    /// quit was requested.
    pub hide_on_close: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dev-ER".into(),
            width: 1024,
            height: 726,
            min_width: 1024,
            min_height: 726,
            hide_on_close: true,
        }
    }
}
