use std::sync::Arc;

use dever_common::{ViewBounds, ViewError};
use tracing::{debug, warn};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebView, WebViewBuilder};

use crate::content::{ContentProvider, SCHEME};
use crate::events::{EventSink, PageLoadState, WebViewEvent};
use crate::ipc::UI_BRIDGE_SCRIPT;

use super::{to_wry_rect, SurfaceOptions};

/// Where the main UI is loaded from.
pub enum MainContent {
    /// Bundled files behind `dever://`.
    Bundled(Arc<ContentProvider>),
    /// A development server URL.
    DevServer(String),
}

impl MainContent {
    pub fn entry_url(&self) -> &str {
        match self {
            MainContent::Bundled(_) => crate::content::ENTRY_URL,
            MainContent::DevServer(url) => url,
        }
    }
}

/// Build the main UI webview covering `bounds` (the whole window). Embedded
/// surfaces are stacked above it.
pub fn build_main_webview<W: HasWindowHandle>(
    window: &W,
    bounds: ViewBounds,
    content: &MainContent,
    sink: EventSink,
    options: &SurfaceOptions,
) -> Result<WebView, ViewError> {
    let mut builder = WebViewBuilder::new()
        .with_bounds(to_wry_rect(bounds))
        .with_devtools(options.devtools)
        .with_clipboard(true)
        .with_initialization_script(UI_BRIDGE_SCRIPT)
        .with_url(content.entry_url());

    if let Some(ua) = &options.user_agent {
        builder = builder.with_user_agent(ua);
    }

    let ipc_sink = sink.clone();
    builder = builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();
        if serde_json::from_str::<serde_json::Value>(&body).is_err() {
            warn!(body_len = body.len(), "main IPC rejected: invalid JSON");
            return;
        }
        ipc_sink.push(WebViewEvent::MainIpc { body });
    });

    let window_sink = sink.clone();
    builder = builder.with_new_window_req_handler(move |url| {
        debug!(url = %url, "main UI requested a new window");
        window_sink.push(WebViewEvent::MainNewWindowRequested { url });
        false
    });

    builder = builder.with_on_page_load_handler(move |event, url| {
        sink.push(WebViewEvent::MainPageLoad {
            state: PageLoadState::from(event),
            url,
        });
    });

    if let MainContent::Bundled(provider) = content {
        let provider = Arc::clone(provider);
        builder = builder.with_custom_protocol(SCHEME.to_string(), move |_id, request| {
            provider.respond(&request.uri().to_string())
        });
    }

    builder
        .build_as_child(window)
        .map_err(|e| ViewError::Create(e.to_string()))
}
