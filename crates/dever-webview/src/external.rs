//! Hand-off of links to the system's default browser.

use dever_common::ViewError;
use tracing::info;

pub trait ExternalOpener {
    fn open(&mut self, url: &str) -> Result<(), ViewError>;
}

/// Opens URLs with the platform browser through `webbrowser`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl ExternalOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<(), ViewError> {
        info!(url, "opening in system browser");
        webbrowser::open(url).map_err(|e| ViewError::External(format!("{url}: {e}")))
    }
}
