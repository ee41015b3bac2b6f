//! Slot registry: the host's table of named view slots.

use std::collections::BTreeMap;

use dever_common::{Rect, SlotName, ViewBounds, ViewError};
use tracing::{debug, warn};

use crate::slot::{SlotState, ViewSlot};
use crate::surface::{SurfaceFactory, SurfaceId};

/// Owns every [`ViewSlot`] and the factory that builds their surfaces.
///
/// `panel` and `modal` exist from the start; other names are created on
/// first use, share the panel's toolbar default, and are dropped again once
/// destroyed.
pub struct ViewSlotRegistry {
    slots: BTreeMap<SlotName, ViewSlot>,
    factory: Box<dyn SurfaceFactory>,
    next_surface: u64,
    panel_toolbar_height: f64,
    modal_toolbar_height: f64,
}

impl ViewSlotRegistry {
    pub fn new(
        factory: Box<dyn SurfaceFactory>,
        panel_toolbar_height: f64,
        modal_toolbar_height: f64,
    ) -> Self {
        let mut slots = BTreeMap::new();
        slots.insert(
            SlotName::panel(),
            ViewSlot::new(SlotName::panel(), panel_toolbar_height),
        );
        slots.insert(
            SlotName::modal(),
            ViewSlot::new(SlotName::modal(), modal_toolbar_height),
        );
        Self {
            slots,
            factory,
            next_surface: 0,
            panel_toolbar_height,
            modal_toolbar_height,
        }
    }

    pub fn get(&self, name: &SlotName) -> Option<&ViewSlot> {
        self.slots.get(name)
    }

    pub fn get_mut(&mut self, name: &SlotName) -> Option<&mut ViewSlot> {
        self.slots.get_mut(name)
    }

    /// Slot for `name`, created empty if it did not exist.
    pub fn entry(&mut self, name: &SlotName) -> &mut ViewSlot {
        let default = if name.is_modal() {
            self.modal_toolbar_height
        } else {
            self.panel_toolbar_height
        };
        self.slots
            .entry(name.clone())
            .or_insert_with(|| ViewSlot::new(name.clone(), default))
    }

    /// `create_or_show` on the named slot.
    ///
    /// When `bounds` is `None` they are derived from `container` and the
    /// slot's toolbar height.
    pub fn create_or_show(
        &mut self,
        name: &SlotName,
        url: &str,
        bounds: Option<ViewBounds>,
        toolbar_height: Option<f64>,
        container: &Rect,
    ) -> Result<(), ViewError> {
        self.entry(name);
        let Self {
            slots,
            factory,
            next_surface,
            ..
        } = self;
        let Some(slot) = slots.get_mut(name) else {
            return Ok(());
        };

        slot.set_toolbar_height(toolbar_height);
        let bounds = bounds.unwrap_or_else(|| slot.bounds_for(container));
        let result = slot.create_or_show(url, bounds, factory.as_mut(), || {
            *next_surface += 1;
            SurfaceId(*next_surface)
        });
        if result.is_err() && slot.state() == SlotState::Empty && !name.is_builtin() {
            slots.remove(name);
        }
        result
    }

    /// Destroy the named slot's surface. Returns `false` if there is no such
    /// slot.
    pub fn destroy(&mut self, name: &SlotName) -> bool {
        let Some(slot) = self.slots.get_mut(name) else {
            return false;
        };
        slot.destroy();
        if !name.is_builtin() {
            self.slots.remove(name);
        }
        true
    }

    /// Recompute bounds of every live slot against `container`.
    pub fn relayout_all(&mut self, container: &Rect) {
        for (name, slot) in self.slots.iter_mut() {
            if let Err(e) = slot.relayout(container) {
                warn!(slot = %name, error = %e, "relayout failed");
            }
        }
    }

    /// Destroy every slot. Used when the host window goes away.
    pub fn destroy_all(&mut self) {
        for slot in self.slots.values_mut() {
            if slot.state() != SlotState::Empty {
                slot.destroy();
            }
        }
        self.slots.retain(|name, _| name.is_builtin());
        debug!("all slots destroyed");
    }

    /// Number of slots currently holding a surface.
    pub fn live_count(&self) -> usize {
        self.slots
            .values()
            .filter(|s| s.state() != SlotState::Empty)
            .count()
    }
}
