//! In-memory surfaces for exercising slots without a rendering engine.

use std::cell::RefCell;
use std::rc::Rc;

use dever_common::{SlotName, ViewBounds, ViewError};

use crate::external::ExternalOpener;
use crate::surface::{HistoryState, Surface, SurfaceFactory, SurfaceId, SurfaceRequest};

/// Everything that happened to one fake surface.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub url: String,
    /// Every load, including the one started at creation.
    pub loads: Vec<String>,
    pub reloads: usize,
    pub backs: usize,
    pub forwards: usize,
    pub bounds: Option<ViewBounds>,
    pub bounds_updates: usize,
    pub attached: bool,
    pub history: HistoryState,
    pub dropped: bool,
}

pub struct FakeSurface {
    id: SurfaceId,
    log: Rc<RefCell<SurfaceLog>>,
}

impl FakeSurface {
    pub fn standalone(id: SurfaceId, url: &str) -> Self {
        let log = SurfaceLog {
            url: url.to_string(),
            loads: vec![url.to_string()],
            attached: true,
            ..Default::default()
        };
        Self {
            id,
            log: Rc::new(RefCell::new(log)),
        }
    }

    pub fn set_history(&self, back: bool, forward: bool) {
        self.log.borrow_mut().history = HistoryState {
            can_go_back: back,
            can_go_forward: forward,
        };
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.log.borrow_mut().dropped = true;
    }
}

impl Surface for FakeSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn url(&self) -> String {
        self.log.borrow().url.clone()
    }

    fn history(&self) -> HistoryState {
        self.log.borrow().history
    }

    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        let mut log = self.log.borrow_mut();
        log.url = url.to_string();
        log.loads.push(url.to_string());
        Ok(())
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.log.borrow_mut().reloads += 1;
        Ok(())
    }

    fn go_back(&mut self) -> Result<(), ViewError> {
        self.log.borrow_mut().backs += 1;
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), ViewError> {
        self.log.borrow_mut().forwards += 1;
        Ok(())
    }

    fn set_bounds(&mut self, bounds: ViewBounds) -> Result<(), ViewError> {
        let mut log = self.log.borrow_mut();
        log.bounds = Some(bounds);
        log.bounds_updates += 1;
        Ok(())
    }

    fn set_attached(&mut self, attached: bool) -> Result<(), ViewError> {
        self.log.borrow_mut().attached = attached;
        Ok(())
    }
}

#[derive(Default)]
struct FactoryLog {
    created: Vec<(SurfaceId, SlotName, Rc<RefCell<SurfaceLog>>)>,
    fail_next: bool,
}

/// Factory handing out [`FakeSurface`]s. Clones share the same log.
#[derive(Clone, Default)]
pub struct FakeFactory {
    inner: Rc<RefCell<FactoryLog>>,
}

impl FakeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surfaces ever created.
    pub fn created(&self) -> usize {
        self.inner.borrow().created.len()
    }

    /// Surfaces created for `slot` and not yet released.
    pub fn live(&self, slot: &SlotName) -> usize {
        self.inner
            .borrow()
            .created
            .iter()
            .filter(|(_, s, log)| s == slot && !log.borrow().dropped)
            .count()
    }

    /// Log of the most recent surface created for `slot`.
    pub fn latest(&self, slot: &SlotName) -> Rc<RefCell<SurfaceLog>> {
        self.inner
            .borrow()
            .created
            .iter()
            .rev()
            .find(|(_, s, _)| s == slot)
            .map(|(_, _, log)| Rc::clone(log))
            .expect("no surface created for slot")
    }

    /// Id of the most recent surface created for `slot`.
    pub fn latest_id(&self, slot: &SlotName) -> SurfaceId {
        self.inner
            .borrow()
            .created
            .iter()
            .rev()
            .find(|(_, s, _)| s == slot)
            .map(|(id, _, _)| *id)
            .expect("no surface created for slot")
    }

    pub fn fail_next(&self) {
        self.inner.borrow_mut().fail_next = true;
    }
}

impl SurfaceFactory for FakeFactory {
    fn create(&mut self, request: SurfaceRequest<'_>) -> Result<Box<dyn Surface>, ViewError> {
        let mut inner = self.inner.borrow_mut();
        if std::mem::take(&mut inner.fail_next) {
            return Err(ViewError::Create("fake failure".into()));
        }

        let log = Rc::new(RefCell::new(SurfaceLog {
            url: request.url.to_string(),
            loads: vec![request.url.to_string()],
            bounds: Some(request.bounds),
            attached: true,
            ..Default::default()
        }));
        inner
            .created
            .push((request.id, request.slot.clone(), Rc::clone(&log)));

        Ok(Box::new(FakeSurface {
            id: request.id,
            log,
        }))
    }
}

/// Records URLs instead of launching a browser.
#[derive(Clone, Default)]
pub struct FakeOpener {
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl ExternalOpener for FakeOpener {
    fn open(&mut self, url: &str) -> Result<(), ViewError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
