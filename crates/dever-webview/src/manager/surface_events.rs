use dever_common::{Event, SlotName};
use tracing::{debug, info, warn};

use crate::events::{PageLoadState, WebViewEvent};
use crate::open_handler::OpenAction;
use crate::surface::SurfaceId;

use super::{HostRequest, ViewManager};

impl ViewManager {
    /// Feed one event drained from the webview sink.
    pub fn handle_event(&mut self, event: WebViewEvent) -> Option<HostRequest> {
        match event {
            WebViewEvent::Navigation {
                slot,
                surface,
                event,
            } => {
                let snapshot = self
                    .registry
                    .get_mut(&slot)
                    .and_then(|s| s.observe_navigation(surface, &event));
                match snapshot {
                    Some(snapshot) => {
                        debug!(slot = %slot, url = %snapshot.url, kind = ?event.kind, "navigation");
                        self.publish(Event::NavigationChanged { slot, snapshot });
                    }
                    None => debug!(slot = %slot, %surface, "stale navigation event ignored"),
                }
            }
            WebViewEvent::NewWindowRequested { slot, surface, url } => {
                self.open_from_slot(&slot, surface, &url);
            }
            WebViewEvent::PageLoad {
                slot, state, url, ..
            } => {
                debug!(slot = %slot, ?state, url = %url, "page load");
            }
            WebViewEvent::MainIpc { body } => return self.handle_ipc(&body),
            WebViewEvent::MainNewWindowRequested { url } => {
                let action = self.policy.decide_for_main(&url);
                self.apply_open(action, None);
            }
            WebViewEvent::MainPageLoad { state, url } => {
                debug!(?state, url = %url, "main UI page load");
                if state == PageLoadState::Finished {
                    return Some(HostRequest::MainLoaded);
                }
            }
        }
        None
    }

    fn open_from_slot(&mut self, slot: &SlotName, surface: SurfaceId, url: &str) {
        let Some(view) = self.registry.get(slot) else {
            debug!(slot = %slot, url, "new-window request from unknown slot");
            return;
        };
        if view.surface_id() != Some(surface) {
            debug!(slot = %slot, %surface, "new-window request from released surface ignored");
            return;
        }

        let action = self
            .policy
            .decide_for_slot(slot, view.current_url(), url);
        self.apply_open(action, Some(slot));
    }

    /// Carry out an open decision. `origin` is the requesting slot, if any.
    fn apply_open(&mut self, action: OpenAction, origin: Option<&SlotName>) {
        match action {
            OpenAction::LoadInPlace(url) => {
                let Some(name) = origin else { return };
                if self.live_host("load-in-place").is_none() {
                    return;
                }
                if let Some(slot) = self.registry.get_mut(name) {
                    debug!(slot = %name, url = %url, "loading new-window target in place");
                    if let Err(e) = slot.load_in_place(&url) {
                        warn!(slot = %name, url = %url, error = %e, "in-place load failed");
                    }
                }
            }
            OpenAction::OpenInModal(url) => {
                debug!(url = %url, "routing new-window target to modal");
                self.publish(Event::OpenUrlInModal { url });
            }
            OpenAction::OpenInPanel(url) => {
                let Some(container) = self.live_host("open-in-panel") else {
                    return;
                };
                let panel = SlotName::panel();
                if let Err(e) = self
                    .registry
                    .create_or_show(&panel, &url, None, None, &container)
                {
                    warn!(url = %url, error = %e, "open in panel failed");
                }
            }
            OpenAction::External(url) => {
                info!(url = %url, "handing new-window target to system browser");
                if let Err(e) = self.opener.open(&url) {
                    warn!(url = %url, error = %e, "external open failed");
                }
            }
            OpenAction::Deny => {
                debug!("new-window request denied");
            }
        }
    }
}
