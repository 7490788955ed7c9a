//! Per-instance carousel behavior flags

use std::time::Duration;

use crate::align::CellAlign;
use crate::error::ModelError;

/// Quiet period before a scroll is considered settled (ms).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 75;

/// Static configuration for a carousel instance. Presets cover the common
/// variants (centered snap, free drag, paged); callsites can also build one
/// ad-hoc and run [`CarouselConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Alignment used both for navigation targets and for resolving the
    /// closest cell.
    pub cell_align: CellAlign,
    /// Number of cells a single previous/next step moves. Must be >= 1.
    pub group_cells: usize,
    /// Whether pointer drags scroll the strip.
    pub allow_drag: bool,
    /// Releasing a drag leaves the strip where it is instead of snapping.
    pub free_drag: bool,
    /// Arrow navigation centers the target cell (true) or pages by one
    /// viewport (false).
    pub center_on_arrow_click: bool,
    /// Layout hint: the viewport shows exactly one cell. Not read by the
    /// engine.
    pub one_at_a_time: bool,
    /// Resize the viewport's cross axis to the selected cell.
    pub adaptive_height: bool,
    /// Debounce window for settle detection (ms). Must be >= 1.
    pub settle_delay_ms: u64,
    /// Issue a corrective animated scroll when a settle resolves (ignored
    /// under `free_drag`). Hosts without native snapping turn this on.
    pub snap_on_settle: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::centered_defaults()
    }
}

impl CarouselConfig {
    /// Centered snapping carousel: arrows center the target, drags snap.
    pub const fn centered_defaults() -> Self {
        Self {
            cell_align: CellAlign::Center,
            group_cells: 1,
            allow_drag: true,
            free_drag: false,
            center_on_arrow_click: true,
            one_at_a_time: false,
            adaptive_height: false,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            snap_on_settle: false,
        }
    }

    /// Free-drag strip: releases keep their position and the index follows
    /// once scrolling settles.
    pub const fn free_drag_defaults() -> Self {
        Self {
            free_drag: true,
            ..Self::centered_defaults()
        }
    }

    /// Paged strip: arrows advance by one viewport, start-aligned.
    pub const fn paged_defaults() -> Self {
        Self {
            cell_align: CellAlign::Start,
            center_on_arrow_click: false,
            ..Self::centered_defaults()
        }
    }

    /// Debounce window as a [`Duration`].
    #[inline]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Reject values the engine cannot operate with.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.group_cells == 0 {
            return Err(ModelError::InvalidConfig(
                "group_cells must be at least 1".to_string(),
            ));
        }
        if self.settle_delay_ms == 0 {
            return Err(ModelError::InvalidConfig(
                "settle_delay_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
