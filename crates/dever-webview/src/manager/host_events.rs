use dever_common::Rect;
use tracing::{debug, info};

use crate::host::CloseAction;

use super::ViewManager;

impl ViewManager {
    /// The host's content area changed size.
    pub fn on_resize(&mut self, content: Rect) {
        if self.live_host("resize").is_none() {
            return;
        }
        if let Some(host) = self.host.as_mut() {
            host.content = content;
        }
        self.registry.relayout_all(&content);
    }

    /// The user asked to close the host window. Returns what the caller
    /// should do with the native window.
    pub fn on_close_requested(&mut self) -> CloseAction {
        let Some(host) = self.host.as_mut() else {
            return CloseAction::Destroy;
        };
        if host.is_destroyed() {
            return CloseAction::Destroy;
        }

        let action = CloseAction::decide(host.force_quit, host.visible, self.hide_on_close);
        match action {
            CloseAction::Hide => {
                host.visible = false;
                debug!("host hidden, slots left running");
            }
            CloseAction::Destroy => self.destroy_host(),
        }
        action
    }

    /// Release every slot and refuse all further operations.
    pub fn destroy_host(&mut self) {
        if let Some(host) = self.host.as_mut() {
            host.mark_destroyed();
        }
        let released = self.registry.live_count();
        self.registry.destroy_all();
        info!(released, "host destroyed, all slots released");
    }

    /// Record the window's visibility after the app shows or hides it.
    pub fn set_host_visible(&mut self, visible: bool) {
        if let Some(host) = self.host.as_mut().filter(|h| !h.is_destroyed()) {
            host.visible = visible;
        }
    }
}
