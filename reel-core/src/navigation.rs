//! Previous/next navigation planning
//!
//! Two navigation feels are supported and intentionally kept apart:
//! centering jumps to a known cell and needs its aligned offset, paging
//! moves by one viewport and only needs a distance. Planning is pure; the
//! engine executes the resulting [`NavigationPlan`].

use reel_model::{CarouselConfig, Cell, Viewport};

use crate::geometry::{POSITION_EPSILON, aligned_offset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            NavDirection::Previous => -1.0,
            NavDirection::Next => 1.0,
        }
    }
}

/// What a navigation command should do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationPlan {
    /// Select `index` now and animate to `offset`.
    Select { index: usize, offset: f32 },
    /// Animate by `delta`; the selection follows on settle.
    Page { delta: f32 },
    /// Already at the bound, or nothing to navigate.
    Stay,
}

/// Index reached from `current` by one group step, clamped to the strip.
/// `None` for an empty strip.
pub fn step_index(
    current: usize,
    count: usize,
    group: usize,
    direction: NavDirection,
) -> Option<usize> {
    let last = count.checked_sub(1)?;
    let group = group.max(1);
    let target = match direction {
        NavDirection::Previous => current.saturating_sub(group),
        NavDirection::Next => current.saturating_add(group),
    };
    Some(target.min(last))
}

/// Plan a previous/next command.
pub fn plan(
    direction: NavDirection,
    config: &CarouselConfig,
    current: usize,
    cells: &[Cell],
    viewport: &Viewport,
) -> NavigationPlan {
    if cells.is_empty() {
        return NavigationPlan::Stay;
    }

    if config.center_on_arrow_click {
        let Some(index) =
            step_index(current, cells.len(), config.group_cells, direction)
        else {
            return NavigationPlan::Stay;
        };
        if index == current {
            return NavigationPlan::Stay;
        }
        let offset = aligned_offset(&cells[index], config.cell_align, viewport);
        NavigationPlan::Select { index, offset }
    } else if has_room(direction, viewport) {
        let from = viewport.scroll_offset;
        let to = viewport
            .clamp_offset(from + direction.sign() * viewport.client_extent);
        NavigationPlan::Page { delta: to - from }
    } else {
        NavigationPlan::Stay
    }
}

/// Whether the viewport can still scroll in `direction`.
pub fn has_room(direction: NavDirection, viewport: &Viewport) -> bool {
    match direction {
        NavDirection::Previous => viewport.scroll_offset > POSITION_EPSILON,
        NavDirection::Next => {
            viewport.scroll_offset < viewport.max_scroll() - POSITION_EPSILON
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> (Vec<Cell>, Viewport) {
        let cells = Cell::uniform_strip(5, 256.0, 16.0, 256.0);
        let vp = Viewport::new(0.0, 800.0, Cell::content_extent(&cells));
        (cells, vp)
    }

    #[test]
    fn step_clamps_to_both_ends() {
        use NavDirection::*;
        assert_eq!(step_index(0, 5, 1, Previous), Some(0));
        assert_eq!(step_index(4, 5, 1, Next), Some(4));
        assert_eq!(step_index(3, 5, 2, Next), Some(4));
        assert_eq!(step_index(1, 5, 2, Previous), Some(0));
        assert_eq!(step_index(0, 0, 1, Next), None);
    }

    #[test]
    fn grouped_steps_from_start() {
        let mut i = 0;
        for _ in 0..2 {
            i = step_index(i, 5, 2, NavDirection::Next).unwrap();
        }
        assert_eq!(i, 4);
    }

    #[test]
    fn centering_plans_a_selection() {
        let (cells, vp) = strip();
        let cfg = CarouselConfig::default();
        let planned = plan(NavDirection::Next, &cfg, 1, &cells, &vp);
        assert_eq!(
            planned,
            NavigationPlan::Select {
                index: 2,
                offset: 272.0
            }
        );
    }

    #[test]
    fn centering_at_bound_stays() {
        let (cells, vp) = strip();
        let cfg = CarouselConfig::default();
        assert_eq!(
            plan(NavDirection::Previous, &cfg, 0, &cells, &vp),
            NavigationPlan::Stay
        );
        assert_eq!(
            plan(NavDirection::Next, &cfg, 4, &cells, &vp),
            NavigationPlan::Stay
        );
    }

    #[test]
    fn paging_moves_by_one_viewport() {
        let cells = Cell::uniform_strip(10, 256.0, 16.0, 256.0);
        let vp = Viewport::new(800.0, 800.0, Cell::content_extent(&cells));
        let cfg = CarouselConfig::paged_defaults();
        assert_eq!(
            plan(NavDirection::Next, &cfg, 0, &cells, &vp),
            NavigationPlan::Page { delta: 800.0 }
        );
        assert_eq!(
            plan(NavDirection::Previous, &cfg, 0, &cells, &vp),
            NavigationPlan::Page { delta: -800.0 }
        );
    }

    #[test]
    fn paging_delta_stops_at_scroll_range() {
        let (cells, vp) = strip();
        let cfg = CarouselConfig::paged_defaults();
        // max scroll is 544
        assert_eq!(
            plan(NavDirection::Next, &cfg, 0, &cells, &vp),
            NavigationPlan::Page { delta: 544.0 }
        );
        let scrolled = vp.with_offset(300.0);
        assert_eq!(
            plan(NavDirection::Previous, &cfg, 0, &cells, &scrolled),
            NavigationPlan::Page { delta: -300.0 }
        );
    }

    #[test]
    fn paging_without_room_stays() {
        let (cells, vp) = strip();
        let cfg = CarouselConfig::paged_defaults();
        assert_eq!(
            plan(NavDirection::Previous, &cfg, 0, &cells, &vp),
            NavigationPlan::Stay
        );
        assert_eq!(
            plan(NavDirection::Next, &cfg, 0, &cells, &vp.with_offset(544.0)),
            NavigationPlan::Stay
        );
    }

    #[test]
    fn empty_strip_stays() {
        let vp = Viewport::new(0.0, 800.0, 0.0);
        let cfg = CarouselConfig::default();
        assert_eq!(
            plan(NavDirection::Next, &cfg, 0, &[], &vp),
            NavigationPlan::Stay
        );
    }
}
