use dever_common::{SlotName, ViewError};
use tracing::{debug, warn};

use crate::channel::ControlMessage;
use crate::ipc::IpcMessage;
use crate::slot::ViewSlot;

use super::{HostRequest, ViewManager};

impl ViewManager {
    /// Handle a raw IPC body posted by the main UI.
    pub fn handle_ipc(&mut self, body: &str) -> Option<HostRequest> {
        let Some(msg) = IpcMessage::from_json(body) else {
            warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return None;
        };

        match ControlMessage::parse(&msg) {
            Ok(control) => self.handle_control(control),
            Err(e) => {
                warn!(kind = %msg.kind, error = %e, "IPC message rejected");
                None
            }
        }
    }

    /// Apply one control message. Failures are logged, never returned.
    pub fn handle_control(&mut self, msg: ControlMessage) -> Option<HostRequest> {
        debug!(kind = msg.kind(), "control message");

        match msg {
            ControlMessage::CreateView {
                slot,
                url,
                bounds,
                toolbar_height,
            } => {
                let container = self.live_host("create-view")?;
                let url = match (url.is_empty(), &self.home_url) {
                    (false, _) => url,
                    (true, Some(home)) => home.clone(),
                    (true, None) => {
                        warn!(slot = %slot, "create-view without url and no home url configured");
                        return None;
                    }
                };
                if let Err(e) =
                    self.registry
                        .create_or_show(&slot, &url, bounds, toolbar_height, &container)
                {
                    warn!(slot = %slot, url = %url, error = %e, "create-view failed");
                }
            }
            ControlMessage::DestroyView(slot) => {
                if self.live_host("destroy-view").is_some() && !self.registry.destroy(&slot) {
                    debug!(op = "destroy-view", slot = %slot, "no such slot");
                }
            }
            ControlMessage::HideView(slot) => {
                self.with_slot("hide-view", &slot, ViewSlot::hide);
            }
            ControlMessage::ShowView(slot) => {
                self.with_slot("show-view", &slot, ViewSlot::show);
            }
            ControlMessage::ToggleView(slot) => {
                self.with_slot("toggle-view", &slot, ViewSlot::toggle);
            }
            ControlMessage::RefreshView(slot) => {
                self.with_slot("refresh-view", &slot, ViewSlot::refresh);
            }
            ControlMessage::GoHome(slot) => {
                self.with_slot("go-home", &slot, ViewSlot::go_home);
            }
            ControlMessage::GoBack(slot) => {
                self.with_slot("go-back", &slot, |s| s.go_back().map(drop));
            }
            ControlMessage::GoForward(slot) => {
                self.with_slot("go-forward", &slot, |s| s.go_forward().map(drop));
            }
            ControlMessage::QueryNavigation { id, slot } => {
                let snapshot = self
                    .registry
                    .get(&slot)
                    .map(ViewSlot::navigation)
                    .unwrap_or_default();
                self.reply(
                    id,
                    serde_json::to_value(&snapshot).unwrap_or(serde_json::Value::Null),
                );
            }
            ControlMessage::GetDataPath { id, key } => {
                return Some(HostRequest::DataPath { id, key });
            }
            ControlMessage::MainWinReady => {
                self.live_host("main-win-ready")?;
                return Some(HostRequest::ShowWindow);
            }
            ControlMessage::QuitApp => {
                if let Some(host) = self.host.as_mut() {
                    host.force_quit = true;
                }
                return Some(HostRequest::Quit);
            }
        }
        None
    }

    /// Slot `name` if the host is live and the slot exists.
    fn slot_for(&mut self, op: &str, name: &SlotName) -> Option<&mut ViewSlot> {
        self.live_host(op)?;
        let slot = self.registry.get_mut(name);
        if slot.is_none() {
            debug!(op, slot = %name, "no such slot");
        }
        slot
    }

    fn with_slot(
        &mut self,
        op: &str,
        name: &SlotName,
        f: impl FnOnce(&mut ViewSlot) -> Result<(), ViewError>,
    ) {
        if let Some(slot) = self.slot_for(op, name) {
            if let Err(e) = f(slot) {
                warn!(op, slot = %name, error = %e, "slot operation failed");
            }
        }
    }
}
