//! Offset/index synchronization engine for horizontally scrolling,
//! cell-based carousels.
//!
//! The engine keeps a continuous scroll offset and a discrete selected cell
//! index in agreement. It turns pointer drags into scroll requests, snaps to
//! the nearest aligned cell, debounces raw scroll notifications into settle
//! points and implements previous/next navigation. Layout is read through a
//! [`GeometryProvider`](reel_contracts::geometry::GeometryProvider) and all
//! motion is requested through a
//! [`ScrollEffector`](reel_contracts::effector::ScrollEffector), so the engine
//! runs without any rendering surface.

#![allow(missing_docs)]

pub mod adaptive;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod navigation;
pub mod selection;
pub mod settle;
pub mod timer;

pub use engine::{CarouselEngine, EnginePhase};
pub use error::{EngineError, Result};
pub use geometry::{aligned_offset, closest_index};
pub use navigation::{NavDirection, NavigationPlan};
pub use selection::{ListenerId, Selection};

pub use reel_contracts::prelude::*;
pub use reel_model::prelude::*;
