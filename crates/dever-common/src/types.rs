use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout geometry as reported by the UI layer (logical pixels, fractional).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Integer rectangle applied to an embedded surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ViewBounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Round a layout rect to whole device units. Negative extents clamp to 0.
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            x: rect.x.round() as i32,
            y: rect.y.round() as i32,
            width: rect.width.round().max(0.0) as u32,
            height: rect.height.round().max(0.0) as u32,
        }
    }
}

impl fmt::Display for ViewBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{},{}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Stable name of a view slot. The UI layer addresses slots only by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotName(String);

impl SlotName {
    pub const PANEL: &'static str = "panel";
    pub const MODAL: &'static str = "modal";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The slot embedded inline in the main layout.
    pub fn panel() -> Self {
        Self::new(Self::PANEL)
    }

    /// The slot used for transient overlays.
    pub fn modal() -> Self {
        Self::new(Self::MODAL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_modal(&self) -> bool {
        self.0 == Self::MODAL
    }

    /// `panel` or `modal`.
    pub fn is_builtin(&self) -> bool {
        self.0 == Self::PANEL || self.0 == Self::MODAL
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Back/forward capability and location of a surface at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub url: String,
}

/// Where a link that asks for a new tab/window ends up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkRoute {
    /// Floating in-app browser surface.
    #[default]
    Modal,
    /// The inline panel slot.
    Panel,
    /// The system's default browser.
    External,
}

/// When a new-window request from embedded content stays in the same surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InPlacePolicy {
    #[default]
    SameOrigin,
    Always,
    Never,
}
