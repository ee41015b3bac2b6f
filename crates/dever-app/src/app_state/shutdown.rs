//! Teardown when the host window is really going away.

use super::core::DeverApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl DeverApp {
    /// Release embedded surfaces before the main UI and the window.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("initiating shutdown");

        if let Some(mut manager) = self.manager.take() {
            // A manager that already saw the close has released its slots.
            if !manager.host().is_some_and(|h| h.is_destroyed()) {
                manager.destroy_host();
            }
        }
        self.flush_outbound();
        self.outbound = None;
        self.main_view = None;
        self.window = None;

        tracing::info!("views released");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::DeverApp;
    use dever_config::DeverConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = DeverApp::new(DeverConfig::default());
        app.shutdown();
        assert!(app.manager.is_none());
        assert!(app.window.is_none());
    }

    #[test]
    fn shutdown_twice_is_safe() {
        let mut app = DeverApp::new(DeverConfig::default());
        app.shutdown();
        app.shutdown();
    }
}
