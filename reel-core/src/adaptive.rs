//! Adaptive cross-axis sizing

use reel_contracts::effector::ScrollEffector;
use reel_model::Cell;
use tracing::trace;

/// Keeps the viewport's cross-axis extent in step with the selected cell.
///
/// Remembers the last extent it requested so repeated syncs to the same
/// size do not reach the effector.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveHeight {
    applied: Option<f32>,
}

impl AdaptiveHeight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Option<f32> {
        self.applied
    }

    /// Forget the last request so the next sync always reaches the effector.
    pub fn reset(&mut self) {
        self.applied = None;
    }

    /// Request the selected cell's cross extent. A missing cell (index out of
    /// range during a content update) keeps the previous extent.
    pub fn sync<E>(&mut self, cell: Option<&Cell>, effector: &mut E) -> bool
    where
        E: ScrollEffector + ?Sized,
    {
        let Some(cell) = cell else {
            trace!("adaptive height: no cell, keeping previous extent");
            return false;
        };
        if self.applied == Some(cell.cross_extent) {
            return false;
        }
        effector.set_cross_axis_extent(cell.cross_extent);
        self.applied = Some(cell.cross_extent);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_contracts::headless::{HeadlessSurface, ScrollRequest};

    #[test]
    fn applies_each_distinct_extent_once() {
        let mut surface = HeadlessSurface::uniform(3, 100.0, 0.0, 100.0);
        let mut adaptive = AdaptiveHeight::new();
        let tall = Cell::new(0, 0.0, 100.0, 320.0);
        let short = Cell::new(1, 100.0, 100.0, 180.0);

        assert!(adaptive.sync(Some(&tall), &mut surface));
        assert!(!adaptive.sync(Some(&tall), &mut surface));
        assert!(adaptive.sync(Some(&short), &mut surface));
        assert_eq!(
            surface.requests(),
            &[
                ScrollRequest::CrossExtent(320.0),
                ScrollRequest::CrossExtent(180.0)
            ]
        );
    }

    #[test]
    fn missing_cell_keeps_previous_extent() {
        let mut surface = HeadlessSurface::uniform(3, 100.0, 0.0, 100.0);
        let mut adaptive = AdaptiveHeight::new();
        adaptive.sync(Some(&Cell::new(0, 0.0, 100.0, 240.0)), &mut surface);

        assert!(!adaptive.sync(None, &mut surface));
        assert_eq!(surface.cross_extent(), Some(240.0));
        assert_eq!(adaptive.applied(), Some(240.0));
    }
}
