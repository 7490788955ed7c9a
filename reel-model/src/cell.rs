//! Cell geometry as supplied by the host layout

/// One item of the carousel strip.
///
/// Cells are measured by the host; the engine treats them as read-only
/// for the duration of one interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Dense 0-based position in the strip.
    pub index: usize,
    /// Distance of the leading edge from the scroll origin.
    pub offset: f32,
    /// Size along the scroll axis.
    pub extent: f32,
    /// Size across the scroll axis (used by adaptive height).
    pub cross_extent: f32,
}

impl Cell {
    pub const fn new(
        index: usize,
        offset: f32,
        extent: f32,
        cross_extent: f32,
    ) -> Self {
        Self {
            index,
            offset,
            extent,
            cross_extent,
        }
    }

    /// Trailing edge along the scroll axis.
    #[inline]
    pub fn end(&self) -> f32 {
        self.offset + self.extent
    }

    /// Lay out `count` equally sized cells separated by `gap`.
    ///
    /// Convenience for hosts with uniform cards and for tests; the pitch
    /// between consecutive leading edges is `extent + gap`.
    pub fn uniform_strip(
        count: usize,
        extent: f32,
        gap: f32,
        cross_extent: f32,
    ) -> Vec<Cell> {
        let pitch = extent + gap.max(0.0);
        (0..count)
            .map(|i| Cell::new(i, i as f32 * pitch, extent, cross_extent))
            .collect()
    }

    /// Total scrollable extent of a strip: the trailing edge of its last cell.
    pub fn content_extent(cells: &[Cell]) -> f32 {
        cells.iter().map(Cell::end).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_strip_uses_pitch() {
        let cells = Cell::uniform_strip(5, 256.0, 16.0, 180.0);
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[2].offset, 544.0);
        assert_eq!(cells[4].index, 4);
        assert_eq!(Cell::content_extent(&cells), 4.0 * 272.0 + 256.0);
    }

    #[test]
    fn content_extent_of_empty_strip_is_zero() {
        assert_eq!(Cell::content_extent(&[]), 0.0);
    }
}
