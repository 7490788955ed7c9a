use reel_model::{Cell, CellAlign, Viewport};

use super::POSITION_EPSILON;

/// Scroll offset that places `cell` in the viewport according to `align`.
///
/// The result always lies in `[0, scrollable - client]`; when the content
/// fits in the viewport it collapses to 0.
pub fn aligned_offset(
    cell: &Cell,
    align: CellAlign,
    viewport: &Viewport,
) -> f32 {
    let raw = match align {
        CellAlign::Start => cell.offset,
        CellAlign::Center => {
            (cell.offset - viewport.client_extent / 2.0 + cell.extent / 2.0)
                .round()
        }
        CellAlign::End => cell.offset + cell.extent - viewport.client_extent,
    };
    viewport.clamp_offset(raw)
}

/// Whether the viewport currently rests on `cell`'s aligned offset.
#[inline]
pub fn is_aligned_at(
    cell: &Cell,
    align: CellAlign,
    viewport: &Viewport,
) -> bool {
    (aligned_offset(cell, align, viewport) - viewport.scroll_offset).abs()
        <= POSITION_EPSILON
}
