//! DeverApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;
use winit::window::Window;

use dever_common::Event;
use dever_config::{DataPaths, DeverConfig};
use dever_webview::{EventSink, ViewManager};

/// Top-level application state.
pub struct DeverApp {
    pub(super) config: DeverConfig,
    pub(super) data_paths: DataPaths,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Main UI webview, filling the window beneath embedded surfaces
    pub(super) main_view: Option<wry::WebView>,

    // Embedded views
    pub(super) manager: Option<ViewManager>,
    pub(super) events: EventSink,
    pub(super) outbound: Option<broadcast::Receiver<Event>>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl DeverApp {
    pub fn new(config: DeverConfig) -> Self {
        let data_paths = DataPaths::from_config(&config.paths);
        Self {
            config,
            data_paths,
            window: None,
            main_view: None,
            manager: None,
            events: EventSink::new(),
            outbound: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
