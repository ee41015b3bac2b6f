//! New-window interception: decides where content asking for a new
//! browsing context is actually displayed. A second native window is never
//! one of the answers.

use dever_common::{InPlacePolicy, LinkRoute, SlotName};
use url::Url;

/// Outcome for one new-window request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenAction {
    /// Load inside the requesting surface.
    LoadInPlace(String),
    /// Ask the UI layer to open the modal slot.
    OpenInModal(String),
    /// Show in the panel slot.
    OpenInPanel(String),
    /// Hand off to the system browser.
    External(String),
    /// Drop the request.
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenPolicy {
    pub route: LinkRoute,
    pub in_place: InPlacePolicy,
}

impl OpenPolicy {
    pub fn new(route: LinkRoute, in_place: InPlacePolicy) -> Self {
        Self { route, in_place }
    }

    /// Decide for a request coming from an embedded slot whose surface
    /// currently shows `current_url`.
    pub fn decide_for_slot(
        &self,
        slot: &SlotName,
        current_url: Option<&str>,
        target: &str,
    ) -> OpenAction {
        if !is_web_url(target) {
            if self.in_place == InPlacePolicy::SameOrigin
                && current_url.is_some_and(|cur| same_origin(cur, target))
            {
                return OpenAction::LoadInPlace(target.to_string());
            }
            return OpenAction::Deny;
        }

        let keep = match self.in_place {
            InPlacePolicy::Always => true,
            InPlacePolicy::Never => false,
            InPlacePolicy::SameOrigin => current_url.is_some_and(|cur| same_origin(cur, target)),
        };
        if keep {
            return OpenAction::LoadInPlace(target.to_string());
        }

        let url = target.to_string();
        match self.route {
            LinkRoute::Modal if slot.is_modal() => OpenAction::LoadInPlace(url),
            LinkRoute::Modal => OpenAction::OpenInModal(url),
            LinkRoute::Panel if slot.as_str() == SlotName::PANEL => OpenAction::LoadInPlace(url),
            LinkRoute::Panel => OpenAction::OpenInPanel(url),
            LinkRoute::External => OpenAction::External(url),
        }
    }

    /// Decide for a request coming from the main UI webview.
    pub fn decide_for_main(&self, target: &str) -> OpenAction {
        if !is_web_url(target) {
            return OpenAction::Deny;
        }
        let url = target.to_string();
        match self.route {
            LinkRoute::Modal => OpenAction::OpenInModal(url),
            LinkRoute::Panel => OpenAction::OpenInPanel(url),
            LinkRoute::External => OpenAction::External(url),
        }
    }
}

/// `target` parses as an http(s) URL. The caller keeps the original text.
fn is_web_url(target: &str) -> bool {
    Url::parse(target).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Scheme, host and port all match. URLs without a host never match.
pub fn same_origin(a: &str, b: &str) -> bool {
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => {
            a.host_str().is_some()
                && a.scheme() == b.scheme()
                && a.host_str() == b.host_str()
                && a.port_or_known_default() == b.port_or_known_default()
        }
        _ => false,
    }
}
