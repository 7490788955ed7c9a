//! Trait surfaces the carousel engine uses to talk to its host.
//!
//! The engine never touches a widget tree directly: it reads layout through
//! a [`GeometryProvider`](geometry::GeometryProvider), requests motion through
//! a [`ScrollEffector`](effector::ScrollEffector) and reports selection
//! changes to [`SelectionListener`](listener::SelectionListener)s.

#![allow(missing_docs)]

pub mod effector;
pub mod geometry;
pub mod headless;
pub mod listener;

/// Frequently used trait combinators for engine and host crates.
pub mod prelude {
    pub use super::effector::ScrollEffector;
    pub use super::geometry::GeometryProvider;
    pub use super::headless::{HeadlessSurface, ScrollRequest};
    pub use super::listener::SelectionListener;
}
