//! In-memory scroll surface
//!
//! A [`HeadlessSurface`] is both a [`GeometryProvider`] and a
//! [`ScrollEffector`]: it stores a fixed cell strip and a scroll offset and
//! applies every request instantly, clamped to the scrollable range. It backs
//! engine tests and hosts that drive the engine without a rendering surface.

use reel_model::{Cell, Viewport};
use tracing::trace;

use crate::effector::ScrollEffector;
use crate::geometry::GeometryProvider;

/// Request received by a [`HeadlessSurface`], in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollRequest {
    Immediate(f32),
    Animated(f32),
    By(f32),
    CrossExtent(f32),
    NativeSnap(bool),
    CancelAnimation,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    cells: Vec<Cell>,
    client_extent: f32,
    scroll_offset: f32,
    cross_extent: Option<f32>,
    native_snap: bool,
    requests: Vec<ScrollRequest>,
}

impl HeadlessSurface {
    pub fn new(cells: Vec<Cell>, client_extent: f32) -> Self {
        Self {
            cells,
            client_extent,
            scroll_offset: 0.0,
            cross_extent: None,
            native_snap: true,
            requests: Vec::new(),
        }
    }

    /// Surface over [`Cell::uniform_strip`].
    pub fn uniform(
        count: usize,
        extent: f32,
        gap: f32,
        client_extent: f32,
    ) -> Self {
        let cells = Cell::uniform_strip(count, extent, gap, extent);
        Self::new(cells, client_extent)
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Move the surface as if the user scrolled it natively (wheel, trackpad).
    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll_offset = self.viewport().clamp_offset(offset);
    }

    pub fn cross_extent(&self) -> Option<f32> {
        self.cross_extent
    }

    pub fn native_snap(&self) -> bool {
        self.native_snap
    }

    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    /// Drain the request log.
    pub fn take_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Replace the strip (simulates a content update).
    pub fn set_cells(&mut self, cells: Vec<Cell>) {
        self.cells = cells;
        self.scroll_offset = self.viewport().clamp_offset(self.scroll_offset);
    }

    pub fn set_client_extent(&mut self, client_extent: f32) {
        self.client_extent = client_extent;
        self.scroll_offset = self.viewport().clamp_offset(self.scroll_offset);
    }

    fn record(&mut self, request: ScrollRequest) {
        trace!(?request, offset = self.scroll_offset, "headless request");
        self.requests.push(request);
    }
}

impl GeometryProvider for HeadlessSurface {
    fn list_cells(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.scroll_offset,
            self.client_extent,
            Cell::content_extent(&self.cells),
        )
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }
}

impl ScrollEffector for HeadlessSurface {
    fn set_offset_immediate(&mut self, offset: f32) {
        self.record(ScrollRequest::Immediate(offset));
        self.scroll_to(offset);
    }

    fn set_offset_animated(&mut self, offset: f32) {
        self.record(ScrollRequest::Animated(offset));
        self.scroll_to(offset);
    }

    fn scroll_by_animated(&mut self, delta: f32) {
        self.record(ScrollRequest::By(delta));
        self.scroll_to(self.scroll_offset + delta);
    }

    fn set_cross_axis_extent(&mut self, extent: f32) {
        self.record(ScrollRequest::CrossExtent(extent));
        self.cross_extent = Some(extent);
    }

    fn set_native_snap(&mut self, enabled: bool) {
        self.record(ScrollRequest::NativeSnap(enabled));
        self.native_snap = enabled;
    }

    fn cancel_animation(&mut self) {
        self.record(ScrollRequest::CancelAnimation);
    }
}
