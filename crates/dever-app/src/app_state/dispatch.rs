//! Requests from the view manager that need the window or config.

use dever_common::Event;
use dever_webview::HostRequest;

use super::core::DeverApp;

/// Timestamp format of the `main-process-message` greeting.
const GREETING_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl DeverApp {
    pub(super) fn handle_host_request(&mut self, request: HostRequest) {
        tracing::debug!(?request, "host request");

        match request {
            HostRequest::ShowWindow => {
                if let Some(window) = &self.window {
                    window.set_visible(true);
                    window.focus_window();
                }
                if let Some(manager) = self.manager.as_mut() {
                    manager.set_host_visible(true);
                }
            }
            HostRequest::Quit => {
                tracing::info!("quit requested");
                self.handle_close_request();
            }
            HostRequest::DataPath { id, key } => {
                let path = self.data_paths.lookup(&key).display().to_string();
                if let Some(manager) = &self.manager {
                    manager.reply(id, serde_json::Value::String(path));
                }
            }
            HostRequest::MainLoaded => {
                if let Some(manager) = &self.manager {
                    manager.publish(Event::MainProcessMessage {
                        message: greeting(chrono::Local::now()),
                    });
                }
            }
        }
    }
}

fn greeting<Tz: chrono::TimeZone>(now: chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(GREETING_FORMAT).to_string()
}
