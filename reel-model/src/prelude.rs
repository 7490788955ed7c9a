//! Frequently used model types for engine and host crates.

pub use crate::align::CellAlign;
pub use crate::cell::Cell;
pub use crate::config::CarouselConfig;
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::input::{PointerEvent, PointerKind, PointerSample};
pub use crate::viewport::Viewport;
