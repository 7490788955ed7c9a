//! Core data model definitions shared across Reel crates.
#![allow(missing_docs)]

pub mod align;
pub mod cell;
pub mod config;
pub mod error;
pub mod input;
pub mod prelude;
pub mod viewport;

pub use align::CellAlign;
pub use cell::Cell;
pub use config::CarouselConfig;
pub use error::{ModelError, Result as ModelResult};
pub use input::{PointerEvent, PointerKind, PointerSample};
pub use viewport::Viewport;
