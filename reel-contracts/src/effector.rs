use std::cell::RefCell;
use std::rc::Rc;

/// Write access to the host scroll container.
///
/// Animated requests are fire-and-forget: the engine never waits for them
/// and learns about the resulting motion only through scroll notifications.
pub trait ScrollEffector {
    /// Jump to an absolute offset.
    fn set_offset_immediate(&mut self, offset: f32);

    /// Animate to an absolute offset.
    fn set_offset_animated(&mut self, offset: f32);

    /// Animate by a signed distance from the current offset.
    fn scroll_by_animated(&mut self, delta: f32);

    /// Resize the viewport across the scroll axis.
    fn set_cross_axis_extent(&mut self, extent: f32);

    /// Suspend (`false`) or restore (`true`) platform scroll snapping.
    fn set_native_snap(&mut self, enabled: bool);

    /// Stop any animation started by an earlier request. Hosts without
    /// cancellable animations can keep the default.
    fn cancel_animation(&mut self) {}
}

impl<T: ScrollEffector + ?Sized> ScrollEffector for Box<T> {
    fn set_offset_immediate(&mut self, offset: f32) {
        (**self).set_offset_immediate(offset)
    }

    fn set_offset_animated(&mut self, offset: f32) {
        (**self).set_offset_animated(offset)
    }

    fn scroll_by_animated(&mut self, delta: f32) {
        (**self).scroll_by_animated(delta)
    }

    fn set_cross_axis_extent(&mut self, extent: f32) {
        (**self).set_cross_axis_extent(extent)
    }

    fn set_native_snap(&mut self, enabled: bool) {
        (**self).set_native_snap(enabled)
    }

    fn cancel_animation(&mut self) {
        (**self).cancel_animation()
    }
}

impl<T: ScrollEffector + ?Sized> ScrollEffector for Rc<RefCell<T>> {
    fn set_offset_immediate(&mut self, offset: f32) {
        self.borrow_mut().set_offset_immediate(offset)
    }

    fn set_offset_animated(&mut self, offset: f32) {
        self.borrow_mut().set_offset_animated(offset)
    }

    fn scroll_by_animated(&mut self, delta: f32) {
        self.borrow_mut().scroll_by_animated(delta)
    }

    fn set_cross_axis_extent(&mut self, extent: f32) {
        self.borrow_mut().set_cross_axis_extent(extent)
    }

    fn set_native_snap(&mut self, enabled: bool) {
        self.borrow_mut().set_native_snap(enabled)
    }

    fn cancel_animation(&mut self) {
        self.borrow_mut().cancel_animation()
    }
}
