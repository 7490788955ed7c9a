use std::cell::RefCell;
use std::rc::Rc;

use reel_model::{Cell, Viewport};

/// Read access to the host layout.
///
/// Implementations must report the layout as it is at call time; the engine
/// re-queries on every event instead of caching.
pub trait GeometryProvider {
    /// Ordered cells of the strip, index `i` at position `i`.
    fn list_cells(&self) -> Vec<Cell>;

    /// Current scroll window.
    fn viewport(&self) -> Viewport;

    /// Number of cells. Override when counting is cheaper than listing.
    fn cell_count(&self) -> usize {
        self.list_cells().len()
    }

    /// Single cell lookup. Override when the host can index directly.
    fn cell(&self, index: usize) -> Option<Cell> {
        self.list_cells().get(index).copied()
    }
}

impl<T: GeometryProvider + ?Sized> GeometryProvider for &T {
    fn list_cells(&self) -> Vec<Cell> {
        (**self).list_cells()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }

    fn cell(&self, index: usize) -> Option<Cell> {
        (**self).cell(index)
    }
}

impl<T: GeometryProvider + ?Sized> GeometryProvider for Box<T> {
    fn list_cells(&self) -> Vec<Cell> {
        (**self).list_cells()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }

    fn cell(&self, index: usize) -> Option<Cell> {
        (**self).cell(index)
    }
}

/// Shared surfaces: one host object often acts as both provider and
/// effector, so the engine holds two handles to the same cell.
impl<T: GeometryProvider + ?Sized> GeometryProvider for Rc<RefCell<T>> {
    fn list_cells(&self) -> Vec<Cell> {
        self.borrow().list_cells()
    }

    fn viewport(&self) -> Viewport {
        self.borrow().viewport()
    }

    fn cell_count(&self) -> usize {
        self.borrow().cell_count()
    }

    fn cell(&self, index: usize) -> Option<Cell> {
        self.borrow().cell(index)
    }
}
