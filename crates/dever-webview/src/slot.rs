//! A named container for at most one embedded surface.
//!
//! ```text
//! Empty --create--> Attached --hide--> Detached --show--> Attached
//! {Empty, Attached, Detached} --destroy--> Empty
//! ```

use dever_common::{NavigationSnapshot, Rect, SlotName, ViewBounds, ViewError};
use tracing::{debug, info};

use crate::bounds::content_bounds_with_default;
use crate::navigation::{NavigationEvent, NavigationTracker};
use crate::surface::{same_url, Surface, SurfaceFactory, SurfaceId, SurfaceRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No surface.
    Empty,
    /// Surface visible inside the host window.
    Attached,
    /// Surface alive but hidden.
    Detached,
}

pub struct ViewSlot {
    name: SlotName,
    surface: Option<Box<dyn Surface>>,
    state: SlotState,
    bounds: Option<ViewBounds>,
    current_url: Option<String>,
    home_url: Option<String>,
    /// Last toolbar height the UI measured for this slot.
    toolbar_height: Option<f64>,
    default_toolbar_height: f64,
    tracker: NavigationTracker,
}

impl ViewSlot {
    pub fn new(name: SlotName, default_toolbar_height: f64) -> Self {
        Self {
            name,
            surface: None,
            state: SlotState::Empty,
            bounds: None,
            current_url: None,
            home_url: None,
            toolbar_height: None,
            default_toolbar_height,
            tracker: NavigationTracker::new(),
        }
    }

    pub fn name(&self) -> &SlotName {
        &self.name
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn bounds(&self) -> Option<ViewBounds> {
        self.bounds
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn home_url(&self) -> Option<&str> {
        self.home_url.as_deref()
    }

    pub fn surface_id(&self) -> Option<SurfaceId> {
        self.surface.as_ref().map(|s| s.id())
    }

    /// Remember the toolbar height the UI measured. `None` keeps the last one.
    pub fn set_toolbar_height(&mut self, height: Option<f64>) {
        if let Some(h) = height.filter(|h| h.is_finite() && *h > 0.0) {
            self.toolbar_height = Some(h);
        }
    }

    /// Bounds for this slot inside `container`.
    pub fn bounds_for(&self, container: &Rect) -> ViewBounds {
        content_bounds_with_default(container, self.toolbar_height, self.default_toolbar_height)
    }

    /// Create the surface on first use, otherwise re-attach and update it.
    ///
    /// An existing surface only reloads when `url` differs from what it
    /// currently shows, so repeated calls on resize are cheap.
    pub fn create_or_show(
        &mut self,
        url: &str,
        bounds: ViewBounds,
        factory: &mut dyn SurfaceFactory,
        next_id: impl FnOnce() -> SurfaceId,
    ) -> Result<(), ViewError> {
        if let Some(surface) = self.surface.as_mut() {
            if self.state != SlotState::Attached {
                surface.set_attached(true)?;
                self.state = SlotState::Attached;
                debug!(slot = %self.name, "slot re-attached");
            }
            surface.set_bounds(bounds)?;
            self.bounds = Some(bounds);

            if !same_url(&surface.url(), url) {
                debug!(slot = %self.name, url, "slot navigating to new url");
                surface.load_url(url)?;
            }
            self.current_url = Some(url.to_string());
            return Ok(());
        }

        let id = next_id();
        let surface = factory.create(SurfaceRequest {
            id,
            slot: &self.name,
            url,
            bounds,
        })?;

        self.tracker.subscribe(id, url);
        self.surface = Some(surface);
        self.state = SlotState::Attached;
        self.bounds = Some(bounds);
        self.current_url = Some(url.to_string());
        self.home_url = Some(url.to_string());
        info!(slot = %self.name, surface = %id, url, %bounds, "surface created");
        Ok(())
    }

    /// Detach without destroying. URL, bounds and home URL survive.
    pub fn hide(&mut self) -> Result<(), ViewError> {
        if self.state != SlotState::Attached {
            return Ok(());
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.set_attached(false)?;
            self.state = SlotState::Detached;
            debug!(slot = %self.name, "slot detached");
        }
        Ok(())
    }

    /// Re-attach a hidden surface at its last recorded bounds.
    pub fn show(&mut self) -> Result<(), ViewError> {
        if self.state != SlotState::Detached {
            return Ok(());
        }
        let (Some(surface), Some(bounds)) = (self.surface.as_mut(), self.bounds) else {
            return Ok(());
        };
        surface.set_attached(true)?;
        surface.set_bounds(bounds)?;
        self.state = SlotState::Attached;
        debug!(slot = %self.name, %bounds, "slot re-attached");
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<(), ViewError> {
        match self.state {
            SlotState::Attached => self.hide(),
            SlotState::Detached => self.show(),
            SlotState::Empty => Ok(()),
        }
    }

    /// Step back in the surface's history. Returns whether it was delegated.
    pub fn go_back(&mut self) -> Result<bool, ViewError> {
        match self.surface.as_mut() {
            Some(surface) if surface.history().can_go_back => {
                surface.go_back()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Step forward in the surface's history. Returns whether it was delegated.
    pub fn go_forward(&mut self) -> Result<bool, ViewError> {
        match self.surface.as_mut() {
            Some(surface) if surface.history().can_go_forward => {
                surface.go_forward()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn refresh(&mut self) -> Result<(), ViewError> {
        match self.surface.as_mut() {
            Some(surface) => surface.reload(),
            None => Ok(()),
        }
    }

    /// Navigate back to the URL the slot was first created with.
    pub fn go_home(&mut self) -> Result<(), ViewError> {
        let (Some(surface), Some(home)) = (self.surface.as_mut(), self.home_url.as_ref()) else {
            return Ok(());
        };
        surface.load_url(home)?;
        self.current_url = Some(home.clone());
        debug!(slot = %self.name, url = %home, "slot went home");
        Ok(())
    }

    /// Load `url` inside the existing surface (new-window interception).
    pub fn load_in_place(&mut self, url: &str) -> Result<(), ViewError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };
        surface.load_url(url)?;
        self.current_url = Some(url.to_string());
        Ok(())
    }

    /// Release the surface and forget all recorded state. The slot can be
    /// created again afterwards.
    pub fn destroy(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            let id = surface.id();
            if self.state == SlotState::Attached {
                if let Err(e) = surface.set_attached(false) {
                    debug!(slot = %self.name, error = %e, "detach before destroy failed");
                }
            }
            drop(surface);
            info!(slot = %self.name, surface = %id, "surface destroyed");
        }
        self.tracker.unsubscribe();
        self.state = SlotState::Empty;
        self.bounds = None;
        self.current_url = None;
        self.home_url = None;
    }

    /// Recompute bounds for a new container. Attached surfaces get them
    /// applied now; detached ones on the next `show`.
    pub fn relayout(&mut self, container: &Rect) -> Result<(), ViewError> {
        if self.state == SlotState::Empty {
            return Ok(());
        }
        let bounds = self.bounds_for(container);
        self.bounds = Some(bounds);
        if self.state == SlotState::Attached {
            if let Some(surface) = self.surface.as_mut() {
                surface.set_bounds(bounds)?;
            }
        }
        Ok(())
    }

    /// Feed a navigation event from `surface`. Returns the new snapshot, or
    /// `None` if the event came from a surface this slot no longer owns.
    pub fn observe_navigation(
        &mut self,
        surface: SurfaceId,
        event: &NavigationEvent,
    ) -> Option<NavigationSnapshot> {
        let history = match self.surface.as_ref() {
            Some(s) if s.id() == surface => s.history(),
            _ => return None,
        };
        let snapshot = self.tracker.observe(surface, event, history)?;
        self.current_url = Some(snapshot.url.clone());
        Some(snapshot)
    }

    /// Current navigation state read from the live surface.
    pub fn navigation(&self) -> NavigationSnapshot {
        self.tracker.query(self.surface.as_deref())
    }
}
