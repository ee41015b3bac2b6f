//! Navigation state tracking for one slot.
//!
//! The snapshot is derived, never stored as history: back/forward ability
//! always comes from the surface's own session history.

use dever_common::NavigationSnapshot;
use serde::{Deserialize, Serialize};

use crate::surface::{HistoryState, Surface, SurfaceId};

/// Kind of navigation a surface reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationKind {
    /// A document navigation committed.
    Navigated,
    /// Same-document navigation (fragment, `pushState`, `popstate`).
    NavigatedInPage,
    /// The load failed; the surface shows its own error content.
    LoadFailed,
}

/// A navigation reported by a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub kind: NavigationKind,
    pub url: String,
}

impl NavigationEvent {
    pub fn new(kind: NavigationKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

/// Fold one navigation event into a snapshot.
///
/// A failed load that carries no URL keeps the previous location; ability
/// flags are always taken from `history`.
pub fn reduce(
    previous: &NavigationSnapshot,
    event: &NavigationEvent,
    history: HistoryState,
) -> NavigationSnapshot {
    let url = if event.url.is_empty() && event.kind == NavigationKind::LoadFailed {
        previous.url.clone()
    } else {
        event.url.clone()
    };

    NavigationSnapshot {
        can_go_back: history.can_go_back,
        can_go_forward: history.can_go_forward,
        url,
    }
}

/// Per-slot subscription to exactly one surface's navigation events.
#[derive(Debug, Default)]
pub struct NavigationTracker {
    subscribed: Option<SurfaceId>,
    last: NavigationSnapshot,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a freshly created surface.
    pub fn subscribe(&mut self, surface: SurfaceId, initial_url: &str) {
        self.subscribed = Some(surface);
        self.last = NavigationSnapshot {
            can_go_back: false,
            can_go_forward: false,
            url: initial_url.to_string(),
        };
    }

    /// Stop tracking. Later events from the old surface are ignored.
    pub fn unsubscribe(&mut self) {
        self.subscribed = None;
        self.last = NavigationSnapshot::default();
    }

    #[cfg(test)]
    pub(crate) fn subscribed(&self) -> Option<SurfaceId> {
        self.subscribed
    }

    /// Apply an event. Returns the new snapshot, or `None` when the event
    /// belongs to a surface this tracker is not subscribed to.
    pub fn observe(
        &mut self,
        surface: SurfaceId,
        event: &NavigationEvent,
        history: HistoryState,
    ) -> Option<NavigationSnapshot> {
        if self.subscribed != Some(surface) {
            return None;
        }
        self.last = reduce(&self.last, event, history);
        Some(self.last.clone())
    }

    #[cfg(test)]
    pub(crate) fn last(&self) -> &NavigationSnapshot {
        &self.last
    }

    /// Current state read straight from the surface, for UI controls that
    /// mount before any navigation event has fired.
    pub fn query(&self, surface: Option<&dyn Surface>) -> NavigationSnapshot {
        match surface {
            Some(s) if self.subscribed == Some(s.id()) => {
                let history = s.history();
                let url = s.url();
                NavigationSnapshot {
                    can_go_back: history.can_go_back,
                    can_go_forward: history.can_go_forward,
                    url: if url.is_empty() {
                        self.last.url.clone()
                    } else {
                        url
                    },
                }
            }
            _ => NavigationSnapshot::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSurface;

    fn history(back: bool, forward: bool) -> HistoryState {
        HistoryState {
            can_go_back: back,
            can_go_forward: forward,
        }
    }

    #[test]
    fn reduce_takes_url_and_flags() {
        let prev = NavigationSnapshot::default();
        let event = NavigationEvent::new(NavigationKind::Navigated, "https://a.test/x");
        let snap = reduce(&prev, &event, history(true, false));
        assert_eq!(snap.url, "https://a.test/x");
        assert!(snap.can_go_back);
        assert!(!snap.can_go_forward);
    }

    #[test]
    fn reduce_in_page_updates_url() {
        let prev = NavigationSnapshot {
            can_go_back: false,
            can_go_forward: false,
            url: "https://a.test/".into(),
        };
        let event = NavigationEvent::new(NavigationKind::NavigatedInPage, "https://a.test/#faq");
        let snap = reduce(&prev, &event, history(true, false));
        assert_eq!(snap.url, "https://a.test/#faq");
        assert!(snap.can_go_back);
    }

    #[test]
    fn failed_load_without_url_keeps_previous_location() {
        let prev = NavigationSnapshot {
            can_go_back: true,
            can_go_forward: false,
            url: "https://a.test/".into(),
        };
        let event = NavigationEvent::new(NavigationKind::LoadFailed, "");
        let snap = reduce(&prev, &event, history(true, true));
        assert_eq!(snap.url, "https://a.test/");
        assert!(snap.can_go_forward);
    }

    #[test]
    fn failed_load_with_url_reports_it() {
        let prev = NavigationSnapshot::default();
        let event = NavigationEvent::new(NavigationKind::LoadFailed, "https://down.test/");
        let snap = reduce(&prev, &event, HistoryState::default());
        assert_eq!(snap.url, "https://down.test/");
    }

    #[test]
    fn tracker_ignores_unsubscribed_surface() {
        let mut tracker = NavigationTracker::new();
        tracker.subscribe(SurfaceId(1), "https://a.test/");
        let event = NavigationEvent::new(NavigationKind::Navigated, "https://a.test/next");

        assert!(tracker.observe(SurfaceId(2), &event, history(true, false)).is_none());
        assert_eq!(tracker.last().url, "https://a.test/");

        let snap = tracker.observe(SurfaceId(1), &event, history(true, false));
        assert_eq!(snap.map(|s| s.url), Some("https://a.test/next".to_string()));
    }

    #[test]
    fn unsubscribe_drops_everything() {
        let mut tracker = NavigationTracker::new();
        tracker.subscribe(SurfaceId(1), "https://a.test/");
        tracker.unsubscribe();

        let event = NavigationEvent::new(NavigationKind::Navigated, "https://a.test/x");
        assert!(tracker.observe(SurfaceId(1), &event, history(false, false)).is_none());
        assert_eq!(tracker.last(), &NavigationSnapshot::default());
        assert!(tracker.subscribed().is_none());
    }

    #[test]
    fn query_reads_live_surface() {
        let surface = FakeSurface::standalone(SurfaceId(4), "https://a.test/");
        surface.set_history(true, true);

        let mut tracker = NavigationTracker::new();
        tracker.subscribe(SurfaceId(4), "https://a.test/");
        let snap = tracker.query(Some(&surface));
        assert!(snap.can_go_back);
        assert!(snap.can_go_forward);
        assert_eq!(snap.url, "https://a.test/");
    }

    #[test]
    fn query_without_surface_is_default() {
        let tracker = NavigationTracker::new();
        assert_eq!(tracker.query(None), NavigationSnapshot::default());
    }
}
