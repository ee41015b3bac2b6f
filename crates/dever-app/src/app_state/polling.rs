//! Drain webview events into the manager and forward outbound events to
//! the main UI, once per loop turn.

use std::time::{Duration, Instant};

use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use dever_webview::ipc::js_dispatch_message;

use super::core::DeverApp;

/// How often the loop wakes up when nothing else is happening.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl DeverApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.flush_outbound();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        for event in self.events.drain() {
            let request = match self.manager.as_mut() {
                Some(manager) => manager.handle_event(event),
                None => None,
            };
            if let Some(request) = request {
                self.handle_host_request(request);
            }
            if self.should_exit {
                return;
            }
        }
    }

    /// Deliver queued outbound events to the main UI's bridge.
    pub(super) fn flush_outbound(&mut self) {
        let Some(rx) = self.outbound.as_mut() else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    let script = js_dispatch_message(event.kind(), &event.payload());
                    if let Some(view) = &self.main_view {
                        if let Err(e) = view.evaluate_script(&script) {
                            tracing::warn!(kind = event.kind(), error = %e, "failed to deliver event to UI");
                        }
                    }
                }
                Err(TryRecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "outbound events dropped");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }
}
