//! Embedded view lifecycle and navigation sync for the Dev-ER host.
//!
//! - Named view slots (`panel`, `modal`) each owning at most one surface
//! - Bounds derived from host geometry and toolbar height
//! - Navigation state reduced from surface events and pushed to the UI layer
//! - New-window interception: load in place, route to the modal, or hand off
//! - Host window resize/close handling
//! - Control-message channel from the UI layer
//!
//! Rendering is behind the [`Surface`] trait; [`wry_backend`] is the
//! production implementation.

pub mod bounds;
pub mod channel;
pub mod content;
pub mod events;
pub mod external;
pub mod host;
pub mod ipc;
pub mod manager;
pub mod navigation;
pub mod open_handler;
pub mod registry;
pub mod slot;
pub mod surface;
pub mod wry_backend;

#[cfg(test)]
pub(crate) mod testing;

pub use channel::{ChannelError, ControlMessage};
pub use content::ContentProvider;
pub use events::{EventSink, PageLoadState, WebViewEvent};
pub use external::{ExternalOpener, SystemBrowser};
pub use host::{CloseAction, HostState};
pub use ipc::IpcMessage;
pub use manager::{HostRequest, ManagerOptions, ViewManager};
pub use navigation::{NavigationEvent, NavigationKind, NavigationTracker};
pub use open_handler::{OpenAction, OpenPolicy};
pub use registry::ViewSlotRegistry;
pub use slot::{SlotState, ViewSlot};
pub use surface::{HistoryState, Surface, SurfaceFactory, SurfaceId, SurfaceRequest};
pub use wry_backend::{build_main_webview, MainContent, SurfaceOptions, WrySurfaceFactory};
