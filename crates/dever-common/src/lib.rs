pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, DeverError, ViewError};
pub use events::{Event, EventBus};
pub use types::{InPlacePolicy, LinkRoute, NavigationSnapshot, Rect, SlotName, ViewBounds};

pub type Result<T> = std::result::Result<T, DeverError>;
