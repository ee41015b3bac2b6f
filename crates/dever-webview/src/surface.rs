//! The rendering seam: what a view slot needs from an embedded surface.

use std::fmt;

use dever_common::{SlotName, ViewBounds, ViewError};

/// Identity of one surface instance. A slot that is destroyed and recreated
/// gets a new id, so events from the released instance can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Back/forward ability as reported by the surface's own session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// An embedded web-content area living inside the host window.
///
/// Attaching and detaching toggle visibility only; dropping the value
/// releases the underlying rendering resources.
pub trait Surface {
    fn id(&self) -> SurfaceId;

    /// URL the surface currently shows.
    fn url(&self) -> String;

    fn history(&self) -> HistoryState;

    fn load_url(&mut self, url: &str) -> Result<(), ViewError>;

    fn reload(&mut self) -> Result<(), ViewError>;

    fn go_back(&mut self) -> Result<(), ViewError>;

    fn go_forward(&mut self) -> Result<(), ViewError>;

    fn set_bounds(&mut self, bounds: ViewBounds) -> Result<(), ViewError>;

    fn set_attached(&mut self, attached: bool) -> Result<(), ViewError>;
}

/// Everything a factory needs to build a surface for a slot.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRequest<'a> {
    pub id: SurfaceId,
    pub slot: &'a SlotName,
    pub url: &'a str,
    pub bounds: ViewBounds,
}

/// Builds surfaces attached to the host window.
///
/// The returned surface is visible at `bounds`, has started loading `url`,
/// and has its navigation and new-window listeners installed. Listeners are
/// installed here and nowhere else.
pub trait SurfaceFactory {
    fn create(&mut self, request: SurfaceRequest<'_>) -> Result<Box<dyn Surface>, ViewError>;
}

/// Compare two URLs after normalization, so `https://a.test` and
/// `https://a.test/` count as the same location.
pub fn same_url(a: &str, b: &str) -> bool {
    match (url::Url::parse(a), url::Url::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
