//! Pointer drag tracking
//!
//! Tracks one drag session at a time and turns pointer positions into
//! absolute scroll offsets. Dragging right moves the content right, which
//! lowers the scroll offset. Offsets are not clamped here; the effector owns
//! the scroll range.

use reel_model::PointerSample;

/// State captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_pointer: f32,
    pub origin_scroll: f32,
    pub last_pointer: f32,
}

impl DragSession {
    /// Pointer travel since the drag started.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.last_pointer - self.origin_pointer
    }

    /// Scroll offset that keeps the content under the pointer.
    #[inline]
    pub fn scroll_target(&self) -> f32 {
        self.origin_scroll - self.displacement()
    }
}

/// Result of ending a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    pub displacement: f32,
}

impl DragRelease {
    pub fn moved(&self) -> bool {
        self.displacement != 0.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Open a session. Returns false if one is already running (a second
    /// finger or button does not restart the drag).
    pub fn begin(
        &mut self,
        sample: PointerSample,
        scroll_offset: f32,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            origin_pointer: sample.x,
            origin_scroll: scroll_offset,
            last_pointer: sample.x,
        });
        true
    }

    /// Feed a pointer position; returns the scroll offset to apply, or
    /// `None` when no drag is active.
    pub fn update(&mut self, sample: PointerSample) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.last_pointer = sample.x;
        Some(session.scroll_target())
    }

    /// Close the session. A release without a matching start yields `None`.
    pub fn finish(&mut self) -> Option<DragRelease> {
        self.session.take().map(|session| DragRelease {
            displacement: session.displacement(),
        })
    }
}
