//! Events raised by surfaces and the main UI webview.
//!
//! wry handlers run on the platform's webview callbacks; they push into an
//! [`EventSink`] which the event loop drains on every tick.

use std::sync::{Arc, Mutex};

use dever_common::SlotName;
use serde::{Deserialize, Serialize};

use crate::navigation::NavigationEvent;
use crate::surface::SurfaceId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    /// An embedded surface navigated.
    Navigation {
        slot: SlotName,
        surface: SurfaceId,
        event: NavigationEvent,
    },
    /// An embedded surface asked to open a new window.
    NewWindowRequested {
        slot: SlotName,
        surface: SurfaceId,
        url: String,
    },
    PageLoad {
        slot: SlotName,
        surface: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    /// Raw IPC body posted by the main UI.
    MainIpc { body: String },
    /// The main UI asked to open a new window.
    MainNewWindowRequested { url: String },
    MainPageLoad { state: PageLoadState, url: String },
}

/// Shared queue between webview callbacks and the event loop.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    inner: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.inner.lock() {
            events.push(event);
        }
    }

    /// Take everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<WebViewEvent> {
        match self.inner.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}
