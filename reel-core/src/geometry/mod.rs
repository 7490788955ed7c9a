//! Pure geometry: cell alignment and nearest-cell resolution.

mod align;
mod resolve;

pub use align::{aligned_offset, is_aligned_at};
pub use resolve::{closest_index, settled_index};

/// Offsets closer than this are treated as the same position.
pub const POSITION_EPSILON: f32 = 0.5;
