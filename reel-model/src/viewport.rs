//! Visible scrolling window

/// Snapshot of the scroll container along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Current scroll offset.
    pub scroll_offset: f32,
    /// Visible size.
    pub client_extent: f32,
    /// Total content size that can be scrolled through.
    pub scrollable_extent: f32,
}

impl Viewport {
    pub const fn new(
        scroll_offset: f32,
        client_extent: f32,
        scrollable_extent: f32,
    ) -> Self {
        Self {
            scroll_offset,
            client_extent,
            scrollable_extent,
        }
    }

    /// Largest offset the container can take. Zero when the content fits.
    #[inline]
    pub fn max_scroll(&self) -> f32 {
        (self.scrollable_extent - self.client_extent).max(0.0)
    }

    /// Clamp an offset into `[0, max_scroll]`.
    #[inline]
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll())
    }

    /// Whether the content is wide enough to scroll at all.
    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.max_scroll() > 0.0
    }

    /// Same viewport scrolled to `offset` (unclamped).
    #[inline]
    pub fn with_offset(self, offset: f32) -> Self {
        Self {
            scroll_offset: offset,
            ..self
        }
    }
}
