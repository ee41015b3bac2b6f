//! Window creation, main UI webview, and view manager setup.

use std::path::PathBuf;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use dever_webview::{
    build_main_webview, ContentProvider, MainContent, ManagerOptions, SurfaceOptions,
    SystemBrowser, ViewManager, WrySurfaceFactory,
};

use super::core::DeverApp;
use super::layout::{content_rect, full_bounds};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Environment variable pointing the main UI at a development server.
pub(super) const DEV_SERVER_ENV: &str = "DEVER_DEV_SERVER_URL";

/// Bundled UI directory next to the executable, when not configured.
const UI_DIR: &str = "ui";

// =============================================================================
// INITIALIZATION
// =============================================================================

impl DeverApp {
    /// Create the (hidden) window, the main UI and the view manager.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(wc.width, wc.height))
            .with_min_inner_size(winit::dpi::LogicalSize::new(wc.min_width, wc.min_height))
            .with_visible(false);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!(error = %e, "failed to create window");
                return false;
            }
        };

        let content = content_rect(window.inner_size(), window.scale_factor());
        let surface_options = self.surface_options();

        let main_content = self.main_content();
        tracing::info!(url = main_content.entry_url(), "loading main UI");
        let main_view = match build_main_webview(
            window.as_ref(),
            full_bounds(&content),
            &main_content,
            self.events.clone(),
            &surface_options,
        ) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(error = %e, "failed to build main UI webview");
                return false;
            }
        };

        let factory = WrySurfaceFactory::new(Arc::clone(&window), self.events.clone(), surface_options);
        let mut manager = ViewManager::new(
            Box::new(factory),
            Box::new(SystemBrowser),
            self.manager_options(),
        );
        manager.attach_host(content);

        self.outbound = Some(manager.subscribe());
        self.manager = Some(manager);
        self.main_view = Some(main_view);
        self.window = Some(window);
        true
    }

    fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            user_agent: self.config.workspace.user_agent.clone(),
            devtools: self.config.workspace.devtools,
        }
    }

    fn manager_options(&self) -> ManagerOptions {
        let ws = &self.config.workspace;
        ManagerOptions {
            route: self.config.links.route,
            in_place: self.config.links.in_place,
            panel_toolbar_height: f64::from(ws.panel_toolbar_height),
            modal_toolbar_height: f64::from(ws.modal_toolbar_height),
            hide_on_close: self.config.window.hide_on_close,
            home_url: Some(ws.home_url.clone()),
        }
    }

    /// Dev server from the environment, else the bundled UI directory.
    fn main_content(&self) -> MainContent {
        if let Some(url) = std::env::var(DEV_SERVER_ENV)
            .ok()
            .filter(|u| !u.trim().is_empty())
        {
            return MainContent::DevServer(url);
        }
        let dir = self.config.paths.ui.clone().unwrap_or_else(default_ui_dir);
        MainContent::Bundled(Arc::new(ContentProvider::new(dir)))
    }
}

fn default_ui_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(UI_DIR)))
        .unwrap_or_else(|| PathBuf::from(UI_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dever_common::LinkRoute;
    use dever_config::DeverConfig;

    #[test]
    fn manager_options_follow_config() {
        let mut config = DeverConfig::default();
        config.links.route = LinkRoute::External;
        config.workspace.panel_toolbar_height = 36;
        config.window.hide_on_close = false;

        let app = DeverApp::new(config);
        let options = app.manager_options();
        assert_eq!(options.route, LinkRoute::External);
        assert_eq!(options.panel_toolbar_height, 36.0);
        assert_eq!(options.modal_toolbar_height, 48.0);
        assert!(!options.hide_on_close);
        assert_eq!(options.home_url.as_deref(), Some("https://portal.dever.app/"));
    }

    #[test]
    fn configured_ui_dir_is_bundled_content() {
        let mut config = DeverConfig::default();
        config.paths.ui = Some(PathBuf::from("/opt/dever/ui"));
        let app = DeverApp::new(config);

        // Only meaningful when no dev server is exported in the test env.
        if std::env::var(DEV_SERVER_ENV).is_err() {
            match app.main_content() {
                MainContent::Bundled(provider) => {
                    assert_eq!(provider.root(), std::path::Path::new("/opt/dever/ui"))
                }
                MainContent::DevServer(url) => panic!("unexpected dev server {url}"),
            }
        }
    }
}
