//! The view manager: single owner and writer of all slot state.
//!
//! Everything runs on the event loop thread. Webview callbacks only queue
//! [`WebViewEvent`](crate::WebViewEvent)s; the loop hands them to
//! [`ViewManager::handle_event`] together with control messages from the UI.

mod dispatch;
mod host_events;
mod surface_events;


use dever_common::{Event, EventBus, InPlacePolicy, LinkRoute, Rect, SlotName};
use tokio::sync::broadcast;
use tracing::debug;

use crate::bounds::{DEFAULT_MODAL_TOOLBAR_HEIGHT, DEFAULT_TOOLBAR_HEIGHT};
use crate::external::ExternalOpener;
use crate::host::HostState;
use crate::open_handler::OpenPolicy;
use crate::registry::ViewSlotRegistry;
use crate::slot::ViewSlot;
use crate::surface::SurfaceFactory;

/// Requests the manager cannot satisfy itself and hands to the host app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// The UI is ready; show the window.
    ShowWindow,
    /// Force-quit was requested; close the window for good.
    Quit,
    /// Answer `get-data-path` for `key` and reply to `id`.
    DataPath { id: Option<u64>, key: String },
    /// The main UI finished loading.
    MainLoaded,
}

#[derive(Debug, Clone)]
pub struct ManagerOptions {
    pub route: LinkRoute,
    pub in_place: InPlacePolicy,
    pub panel_toolbar_height: f64,
    pub modal_toolbar_height: f64,
    pub hide_on_close: bool,
    /// URL used by `create-view` requests that leave `url` empty.
    pub home_url: Option<String>,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            route: LinkRoute::default(),
            in_place: InPlacePolicy::default(),
            panel_toolbar_height: DEFAULT_TOOLBAR_HEIGHT,
            modal_toolbar_height: DEFAULT_MODAL_TOOLBAR_HEIGHT,
            hide_on_close: true,
            home_url: None,
        }
    }
}

pub struct ViewManager {
    /// `None` until the host window exists.
    host: Option<HostState>,
    registry: ViewSlotRegistry,
    policy: OpenPolicy,
    hide_on_close: bool,
    home_url: Option<String>,
    bus: EventBus,
    opener: Box<dyn ExternalOpener>,
}

impl ViewManager {
    pub fn new(
        factory: Box<dyn SurfaceFactory>,
        opener: Box<dyn ExternalOpener>,
        options: ManagerOptions,
    ) -> Self {
        Self {
            host: None,
            registry: ViewSlotRegistry::new(
                factory,
                options.panel_toolbar_height,
                options.modal_toolbar_height,
            ),
            policy: OpenPolicy::new(options.route, options.in_place),
            hide_on_close: options.hide_on_close,
            home_url: options.home_url,
            bus: EventBus::default(),
            opener,
        }
    }

    /// Register the host window and its initial content area.
    pub fn attach_host(&mut self, content: Rect) {
        debug!(?content, "host attached");
        self.host = Some(HostState::new(content));
    }

    pub fn host(&self) -> Option<&HostState> {
        self.host.as_ref()
    }

    /// Receiver for outbound events, to be forwarded to the main UI.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    pub fn publish(&self, event: Event) {
        self.bus.publish(event);
    }

    /// Answer a synchronous request. Requests without an id get no reply.
    pub fn reply(&self, id: Option<u64>, value: serde_json::Value) {
        match id {
            Some(id) => {
                self.bus.publish(Event::Reply { id, value });
            }
            None => debug!("synchronous request without id, reply dropped"),
        }
    }

    pub fn slot(&self, name: &SlotName) -> Option<&ViewSlot> {
        self.registry.get(name)
    }

    #[cfg(test)]
    pub(crate) fn registry(&self) -> &ViewSlotRegistry {
        &self.registry
    }

    /// Content area of a live host, or `None` (logged) when there is none.
    fn live_host(&self, op: &str) -> Option<Rect> {
        match &self.host {
            Some(host) if !host.is_destroyed() => Some(host.content),
            Some(_) => {
                debug!(op, "host destroyed, ignoring");
                None
            }
            None => {
                debug!(op, "no host window, ignoring");
                None
            }
        }
    }
}
