use reel_model::{Cell, CellAlign, Viewport};

use super::align::is_aligned_at;

/// Index of the cell whose alignment point is nearest the viewport's.
///
/// Both points follow the same policy: leading edges for `Start`, midpoints
/// for `Center`, trailing edges for `End`. Exact ties keep the lower index.
/// An empty strip resolves to 0.
pub fn closest_index(
    viewport: &Viewport,
    align: CellAlign,
    cells: &[Cell],
) -> usize {
    let target = align.anchor(viewport.scroll_offset, viewport.client_extent);

    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (i, cell) in cells.iter().enumerate() {
        let distance = (align.anchor(cell.offset, cell.extent) - target).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

/// Index to commit once scrolling has stopped.
///
/// Near the ends of the strip several cells clamp to the same aligned
/// offset, so the nearest cell is not necessarily the one that was targeted.
/// When the viewport still rests on `current`'s aligned offset the current
/// selection is kept; otherwise this is [`closest_index`].
pub fn settled_index(
    current: usize,
    viewport: &Viewport,
    align: CellAlign,
    cells: &[Cell],
) -> usize {
    match cells.get(current) {
        Some(cell) if is_aligned_at(cell, align, viewport) => current,
        _ => closest_index(viewport, align, cells),
    }
}
