use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{NavigationSnapshot, SlotName};

/// Outbound events pushed from the host to the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Event {
    NavigationChanged {
        slot: SlotName,
        #[serde(flatten)]
        snapshot: NavigationSnapshot,
    },
    OpenUrlInModal {
        url: String,
    },
    MainProcessMessage {
        message: String,
    },
    /// Answer to a synchronous request carrying `id`.
    Reply {
        id: u64,
        value: serde_json::Value,
    },
}

impl Event {
    /// Wire name the UI layer subscribes to.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::NavigationChanged { .. } => "navigation-changed",
            Event::OpenUrlInModal { .. } => "open-url-in-modal",
            Event::MainProcessMessage { .. } => "main-process-message",
            Event::Reply { .. } => "reply",
        }
    }

    /// Payload without the `kind` tag.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Event::NavigationChanged { slot, snapshot } => serde_json::json!({
                "slot": slot,
                "canGoBack": snapshot.can_go_back,
                "canGoForward": snapshot.can_go_forward,
                "url": snapshot.url,
            }),
            Event::OpenUrlInModal { url } => serde_json::json!({ "url": url }),
            Event::MainProcessMessage { message } => serde_json::json!(message),
            Event::Reply { id, value } => serde_json::json!({ "id": id, "value": value }),
        }
    }
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(kind = event.kind(), "event published");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(url: &str) -> Event {
        Event::NavigationChanged {
            slot: SlotName::panel(),
            snapshot: NavigationSnapshot {
                can_go_back: true,
                can_go_forward: false,
                url: url.into(),
            },
        }
    }

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(nav("https://a.test/"));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, nav("https://a.test/"));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::OpenUrlInModal {
            url: "https://b.test".into(),
        });

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::OpenUrlInModal { ref url } if url == "https://b.test"));
        assert_eq!(e1, e2);
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(nav("https://a.test/")), 0);
    }

    #[test]
    fn try_recv_drains_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        bus.publish(nav("https://a.test/1"));
        bus.publish(nav("https://a.test/2"));

        assert_eq!(rx.try_recv().unwrap(), nav("https://a.test/1"));
        assert_eq!(rx.try_recv().unwrap(), nav("https://a.test/2"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn navigation_changed_wire_shape() {
        let event = nav("https://a.test/");
        assert_eq!(event.kind(), "navigation-changed");
        let payload = event.payload();
        assert_eq!(payload["slot"], "panel");
        assert_eq!(payload["canGoBack"], true);
        assert_eq!(payload["canGoForward"], false);
        assert_eq!(payload["url"], "https://a.test/");
    }

    #[test]
    fn tagged_serialization_flattens_snapshot() {
        let json = serde_json::to_value(nav("https://a.test/")).unwrap();
        assert_eq!(json["kind"], "navigation-changed");
        assert_eq!(json["canGoBack"], true);
        assert_eq!(json["slot"], "panel");
    }

    #[test]
    fn reply_wire_shape() {
        let event = Event::Reply {
            id: 3,
            value: serde_json::json!("/srv/public"),
        };
        assert_eq!(event.kind(), "reply");
        assert_eq!(
            event.payload(),
            serde_json::json!({ "id": 3, "value": "/srv/public" })
        );
    }

    #[test]
    fn open_url_in_modal_wire_shape() {
        let event = Event::OpenUrlInModal {
            url: "https://b.test".into(),
        };
        assert_eq!(event.kind(), "open-url-in-modal");
        assert_eq!(event.payload(), serde_json::json!({ "url": "https://b.test" }));
    }
}
