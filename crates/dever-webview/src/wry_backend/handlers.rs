use std::sync::{Arc, Mutex};

use dever_common::SlotName;
use serde::Deserialize;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{EventSink, PageLoadState, WebViewEvent};
use crate::ipc::{IpcMessage, NAV_REPORT_KIND};
use crate::navigation::{NavigationEvent, NavigationKind};
use crate::surface::{HistoryState, SurfaceId};

// =============================================================================
// NAVIGATION REPORTS
// =============================================================================

/// Payload posted by the injected navigation reporter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NavReport {
    pub event: NavigationKind,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub can_go_back: bool,
    #[serde(default)]
    pub can_go_forward: bool,
}

/// Parse an IPC body from an embedded page. Only navigation reports are
/// accepted; embedded content gets no other channel into the host.
pub(crate) fn parse_nav_report(body: &str) -> Option<NavReport> {
    let msg = IpcMessage::from_json(body)?;
    if msg.kind != NAV_REPORT_KIND {
        return None;
    }
    serde_json::from_value(msg.payload).ok()
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

/// Identity stamped on every event a surface raises.
#[derive(Clone)]
pub(super) struct Origin {
    pub slot: SlotName,
    pub surface: SurfaceId,
    pub sink: EventSink,
}

pub(super) fn attach_nav_report_handler<'a>(
    builder: WebViewBuilder<'a>,
    origin: Origin,
    history: Arc<Mutex<HistoryState>>,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        let Some(report) = parse_nav_report(body) else {
            warn!(
                slot = %origin.slot,
                body_len = body.len(),
                "IPC from embedded page rejected"
            );
            return;
        };

        if let Ok(mut h) = history.lock() {
            *h = HistoryState {
                can_go_back: report.can_go_back,
                can_go_forward: report.can_go_forward,
            };
        }
        origin.sink.push(WebViewEvent::Navigation {
            slot: origin.slot.clone(),
            surface: origin.surface,
            event: NavigationEvent::new(report.event, report.url),
        });
    })
}

/// Every new-window request is denied here; the manager decides where the
/// URL goes once it drains the event.
pub(super) fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    origin: Origin,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| {
        debug!(slot = %origin.slot, url = %url, "new window requested");
        origin.sink.push(WebViewEvent::NewWindowRequested {
            slot: origin.slot.clone(),
            surface: origin.surface,
            url,
        });
        false
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    origin: Origin,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        origin.sink.push(WebViewEvent::PageLoad {
            slot: origin.slot.clone(),
            surface: origin.surface,
            state: PageLoadState::from(event),
            url,
        });
    })
}
