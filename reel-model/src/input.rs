//! Unified pointer input
//!
//! Mouse, touch and pen events are folded into one sample type so the drag
//! algorithm only deals with coordinates.

/// Device that produced a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// A single pointer position in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn mouse(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Mouse,
            x,
            y,
        }
    }

    pub const fn touch(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Touch,
            x,
            y,
        }
    }

    /// Primary touch point of a multi-touch event, if any.
    pub fn from_touches(points: &[(f32, f32)]) -> Option<Self> {
        points.first().map(|&(x, y)| Self::touch(x, y))
    }
}

/// Pointer lifecycle event.
///
/// `Up` and `Cancel` carry no position: the release may happen outside the
/// interactive surface and hosts forward it from a global listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(PointerSample),
    Move(PointerSample),
    Up,
    Cancel,
}
