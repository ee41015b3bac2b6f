//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError`, replacing each bad
//! value with its default.

mod helpers;

use crate::schema::DeverConfig;
use dever_common::ConfigError;

use helpers::{check_range, check_web_url};

/// Upper bound for a toolbar height in pixels.
const MAX_TOOLBAR_HEIGHT: u32 = 200;

/// Config values that are checked, and reset as a unit by [`repair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    HomeUrl,
    PanelToolbarHeight,
    ModalToolbarHeight,
    WindowSize,
    LogLevel,
}

fn check(config: &DeverConfig) -> Vec<(Field, String)> {
    let ws = &config.workspace;
    let window = &config.window;
    let window_size = (window.width == 0 || window.height == 0).then(|| {
        format!("window size {}x{} must be positive", window.width, window.height)
    });
    let log_level = config
        .logging
        .level
        .trim()
        .is_empty()
        .then(|| "logging.level is empty".to_string());

    [
        (Field::HomeUrl, check_web_url("workspace.home_url", &ws.home_url)),
        (
            Field::PanelToolbarHeight,
            check_range(
                "workspace.panel_toolbar_height",
                ws.panel_toolbar_height,
                0,
                MAX_TOOLBAR_HEIGHT,
            ),
        ),
        (
            Field::ModalToolbarHeight,
            check_range(
                "workspace.modal_toolbar_height",
                ws.modal_toolbar_height,
                0,
                MAX_TOOLBAR_HEIGHT,
            ),
        ),
        (Field::WindowSize, window_size),
        (Field::LogLevel, log_level),
    ]
    .into_iter()
    .filter_map(|(field, problem)| problem.map(|p| (field, p)))
    .collect()
}

/// Reset each invalid value to its default, leaving the rest of the config
/// untouched. The error lists every value that was replaced.
pub fn repair(config: &mut DeverConfig) -> Result<(), ConfigError> {
    let found = check(config);
    let defaults = DeverConfig::default();
    for (field, _) in &found {
        match field {
            Field::HomeUrl => config.workspace.home_url = defaults.workspace.home_url.clone(),
            Field::PanelToolbarHeight => {
                config.workspace.panel_toolbar_height = defaults.workspace.panel_toolbar_height
            }
            Field::ModalToolbarHeight => {
                config.workspace.modal_toolbar_height = defaults.workspace.modal_toolbar_height
            }
            Field::WindowSize => {
                config.window.width = defaults.window.width;
                config.window.height = defaults.window.height;
            }
            Field::LogLevel => config.logging.level = defaults.logging.level.clone(),
        }
    }
    if found.is_empty() {
        return Ok(());
    }
    let problems: Vec<String> = found.into_iter().map(|(_, e)| e).collect();
    Err(ConfigError::ValidationError(problems.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(config: &DeverConfig) -> Result<(), ConfigError> {
        repair(&mut config.clone())
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&DeverConfig::default()).is_ok());
    }

    #[test]
    fn rejects_non_web_home_url() {
        let mut config = DeverConfig::default();
        config.workspace.home_url = "file:///etc/passwd".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("unsupported scheme 'file'"), "{err}");
    }

    #[test]
    fn rejects_empty_home_url() {
        let mut config = DeverConfig::default();
        config.workspace.home_url = "  ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("workspace.home_url is empty"), "{err}");
    }

    #[test]
    fn rejects_oversized_toolbar() {
        let mut config = DeverConfig::default();
        config.workspace.modal_toolbar_height = 201;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("modal_toolbar_height = 201"), "{err}");
    }

    #[test]
    fn collects_all_errors() {
        let mut config = DeverConfig::default();
        config.workspace.home_url = "not a url".into();
        config.window.width = 0;
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("not a valid URL"));
        assert!(err.contains("must be positive"));
        assert!(err.contains("; "));
    }

    #[test]
    fn repair_resets_only_invalid_values() {
        let mut config = DeverConfig::default();
        config.workspace.panel_toolbar_height = 250;
        config.workspace.modal_toolbar_height = 60;
        config.workspace.home_url = "https://a.test/".into();
        config.window.height = 0;

        let err = repair(&mut config).unwrap_err().to_string();
        assert!(err.contains("panel_toolbar_height = 250"), "{err}");
        assert!(err.contains("window size 1024x0"), "{err}");
        assert!(!err.contains("modal_toolbar_height"), "{err}");
        assert_eq!(config.workspace.panel_toolbar_height, 40);
        assert_eq!(config.window.height, 726);
        assert_eq!(config.workspace.modal_toolbar_height, 60);
        assert_eq!(config.workspace.home_url, "https://a.test/");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn repair_of_valid_config_is_noop() {
        let mut config = DeverConfig::default();
        assert!(repair(&mut config).is_ok());
    }
}
