//! CarouselEngine: one configurable engine for centered, free-drag and paged
//! carousels.
//!
//! The engine is single-threaded and event driven. Hosts forward pointer
//! events, raw scroll notifications and navigation commands, and poll the
//! settle timer with the current instant. Every selection change is pushed
//! to listeners synchronously, from within the call that caused it.

use std::time::Instant;

use reel_contracts::effector::ScrollEffector;
use reel_contracts::geometry::GeometryProvider;
use reel_contracts::listener::SelectionListener;
use reel_model::{CarouselConfig, Cell, PointerEvent, PointerSample, Viewport};
use tracing::{debug, trace};

use crate::adaptive::AdaptiveHeight;
use crate::drag::DragTracker;
use crate::error::Result;
use crate::geometry::{
    POSITION_EPSILON, aligned_offset, is_aligned_at, settled_index,
};
use crate::navigation::{self, NavDirection, NavigationPlan};
use crate::selection::{ListenerId, Selection};
use crate::settle::SettleDetector;

/// Interaction phase. The engine is always in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnginePhase {
    #[default]
    Idle,
    /// A pointer drag is in progress.
    Dragging,
    /// Scrolling happened and the settle window has not elapsed yet.
    Settling,
}

/// Keeps a carousel's scroll offset and selected index in agreement.
///
/// `G` supplies layout, `E` carries out scroll requests. Both are often the
/// same host object behind an `Rc<RefCell<_>>`.
#[derive(Debug)]
pub struct CarouselEngine<G, E> {
    config: CarouselConfig,
    geometry: Option<G>,
    effector: E,
    selection: Selection,
    drag: DragTracker,
    settle: SettleDetector,
    adaptive: AdaptiveHeight,
}

impl<G, E> CarouselEngine<G, E>
where
    G: GeometryProvider,
    E: ScrollEffector,
{
    /// Create an engine without layout. Geometry-dependent calls are no-ops
    /// until [`attach_geometry`](Self::attach_geometry).
    pub fn new(config: CarouselConfig, effector: E) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            geometry: None,
            effector,
            selection: Selection::new(),
            drag: DragTracker::new(),
            settle: SettleDetector::new(config.settle_delay()),
            adaptive: AdaptiveHeight::new(),
        })
    }

    pub fn with_geometry(
        config: CarouselConfig,
        geometry: G,
        effector: E,
    ) -> Result<Self> {
        let mut engine = Self::new(config, effector)?;
        engine.attach_geometry(geometry);
        Ok(engine)
    }

    pub fn attach_geometry(&mut self, geometry: G) {
        self.geometry = Some(geometry);
        self.adaptive.reset();
        self.refresh_layout();
    }

    /// Detach layout, ending any drag and dropping a pending settle.
    pub fn detach_geometry(&mut self) -> Option<G> {
        self.abort_drag();
        self.settle.cancel();
        self.geometry.take()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Swap the configuration. Any active drag ends without resolving and
    /// a pending settle is dropped.
    pub fn reconfigure(&mut self, config: CarouselConfig) -> Result<()> {
        config.validate()?;
        self.abort_drag();
        self.settle.cancel();

        let adaptive_enabled =
            config.adaptive_height && !self.config.adaptive_height;
        self.config = config;
        self.settle.set_delay(config.settle_delay());
        debug!(?config, "carousel reconfigured");

        if adaptive_enabled {
            self.adaptive.reset();
            let cell = self.selected_cell();
            self.sync_adaptive(cell.as_ref());
        }
        Ok(())
    }

    pub fn geometry(&self) -> Option<&G> {
        self.geometry.as_ref()
    }

    pub fn effector(&self) -> &E {
        &self.effector
    }

    pub fn effector_mut(&mut self) -> &mut E {
        &mut self.effector
    }

    /// Committed index, or 0 when no layout is attached.
    pub fn selected_index(&self) -> usize {
        if self.geometry.is_none() {
            return 0;
        }
        self.selection.index()
    }

    pub fn selected_cell(&self) -> Option<Cell> {
        self.geometry.as_ref()?.cell(self.selection.index())
    }

    pub fn phase(&self) -> EnginePhase {
        if self.drag.is_active() {
            EnginePhase::Dragging
        } else if self.settle.is_pending() {
            EnginePhase::Settling
        } else {
            EnginePhase::Idle
        }
    }

    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: SelectionListener + 'static,
    {
        self.selection.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.selection.unsubscribe(id)
    }

    // ---- pointer input -------------------------------------------------

    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Down(sample) => {
                self.pointer_down(sample);
            }
            PointerEvent::Move(sample) => self.pointer_move(sample),
            PointerEvent::Up => self.pointer_up(now),
            PointerEvent::Cancel => self.pointer_cancel(now),
        }
    }

    /// Start a drag. Returns whether a session was opened.
    pub fn pointer_down(&mut self, sample: PointerSample) -> bool {
        if !self.config.allow_drag {
            trace!("drag disabled, ignoring pointer down");
            return false;
        }
        let Some(geometry) = self.geometry.as_ref() else {
            return false;
        };
        let scroll = geometry.viewport().scroll_offset;
        if !self.drag.begin(sample, scroll) {
            return false;
        }

        self.settle.cancel();
        self.effector.cancel_animation();
        self.effector.set_native_snap(false);
        debug!(x = sample.x, kind = ?sample.kind, scroll, "drag started");
        true
    }

    pub fn pointer_move(&mut self, sample: PointerSample) {
        if let Some(target) = self.drag.update(sample) {
            trace!(x = sample.x, target, "drag move");
            self.effector.set_offset_immediate(target);
        }
    }

    /// End a drag. Hosts must forward releases that happen outside the
    /// carousel too, or the engine stays in [`EnginePhase::Dragging`].
    pub fn pointer_up(&mut self, now: Instant) {
        let Some(release) = self.drag.finish() else {
            trace!("pointer up without drag");
            return;
        };
        self.effector.set_native_snap(true);
        debug!(displacement = release.displacement, "drag ended");

        if !release.moved() {
            return;
        }
        if self.config.free_drag {
            self.settle.notify_scroll(now);
        } else {
            self.snap_to_closest();
        }
    }

    /// Abandon a drag. The strip stays where it is and the index follows on
    /// settle.
    pub fn pointer_cancel(&mut self, now: Instant) {
        let Some(release) = self.drag.finish() else {
            return;
        };
        self.effector.set_native_snap(true);
        debug!(displacement = release.displacement, "drag cancelled");
        if release.moved() {
            self.settle.notify_scroll(now);
        }
    }

    // ---- scroll / settle -----------------------------------------------

    /// Raw scroll notification from the host.
    pub fn on_scroll(&mut self, now: Instant) {
        if self.geometry.is_none() {
            return;
        }
        if self.drag.is_active() {
            trace!("scroll during drag, settle not armed");
            return;
        }
        self.settle.notify_scroll(now);
    }

    /// Drive the settle timer. Returns true when a settle fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.settle.poll(now) {
            return false;
        }
        self.settle_now();
        true
    }

    /// When the host should call [`poll`](Self::poll) next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    // ---- navigation ----------------------------------------------------

    pub fn previous(&mut self) -> bool {
        self.navigate(NavDirection::Previous)
    }

    pub fn next(&mut self) -> bool {
        self.navigate(NavDirection::Next)
    }

    /// Run a previous/next command. Returns false when nothing moved.
    pub fn navigate(&mut self, direction: NavDirection) -> bool {
        if self.drag.is_active() {
            trace!(?direction, "navigation ignored during drag");
            return false;
        }
        let Some((cells, viewport)) = self.snapshot() else {
            return false;
        };

        let current = self.selection.index();
        match navigation::plan(
            direction,
            &self.config,
            current,
            &cells,
            &viewport,
        ) {
            NavigationPlan::Stay => {
                trace!(?direction, current, "navigation at bound");
                false
            }
            NavigationPlan::Select { index, offset } => {
                debug!(
                    ?direction,
                    from = current,
                    to = index,
                    offset,
                    "navigate"
                );
                self.settle.cancel();
                self.effector.cancel_animation();
                self.commit(index, &cells);
                self.effector.set_offset_animated(offset);
                true
            }
            NavigationPlan::Page { delta } => {
                debug!(?direction, delta, "page");
                self.effector.cancel_animation();
                self.effector.scroll_by_animated(delta);
                true
            }
        }
    }

    /// Select `index` (clamped) and animate it into its aligned position.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.jump(index, true)
    }

    /// Like [`go_to`](Self::go_to) without animation.
    pub fn go_to_immediate(&mut self, index: usize) -> bool {
        self.jump(index, false)
    }

    pub fn can_go_previous(&self) -> bool {
        self.can_navigate(NavDirection::Previous)
    }

    pub fn can_go_next(&self) -> bool {
        self.can_navigate(NavDirection::Next)
    }

    // ---- layout --------------------------------------------------------

    /// Re-read layout after the host changed its cells. Clamps a selection
    /// that fell out of range and re-applies adaptive height.
    pub fn refresh_layout(&mut self) {
        let Some((cells, _)) = self.snapshot() else {
            return;
        };
        let current = self.selection.index();
        let clamped = current.min(cells.len().saturating_sub(1));

        self.adaptive.reset();
        if clamped != current {
            debug!(from = current, to = clamped, "selection clamped");
            self.commit(clamped, &cells);
        } else {
            self.sync_adaptive(cells.get(current));
        }
    }

    // ---- internals -----------------------------------------------------

    fn snapshot(&self) -> Option<(Vec<Cell>, Viewport)> {
        let geometry = self.geometry.as_ref()?;
        Some((geometry.list_cells(), geometry.viewport()))
    }

    fn commit(&mut self, index: usize, cells: &[Cell]) -> bool {
        let cell = cells.get(index);
        let changed = self.selection.commit(index, cell);
        if changed {
            debug!(index, "selection committed");
            self.sync_adaptive(cell);
        }
        changed
    }

    fn sync_adaptive(&mut self, cell: Option<&Cell>) {
        if self.config.adaptive_height {
            self.adaptive.sync(cell, &mut self.effector);
        }
    }

    fn abort_drag(&mut self) {
        if self.drag.finish().is_some() {
            self.effector.set_native_snap(true);
        }
    }

    fn snap_to_closest(&mut self) {
        let Some((cells, viewport)) = self.snapshot() else {
            return;
        };
        if cells.is_empty() {
            return;
        }
        let align = self.config.cell_align;
        let index =
            settled_index(self.selection.index(), &viewport, align, &cells);
        let target = aligned_offset(&cells[index], align, &viewport);
        debug!(index, target, "snap after drag");
        self.commit(index, &cells);
        self.effector.set_offset_animated(target);
    }

    fn settle_now(&mut self) {
        let Some((cells, viewport)) = self.snapshot() else {
            return;
        };
        if cells.is_empty() {
            self.commit(0, &cells);
            return;
        }
        let align = self.config.cell_align;
        let index =
            settled_index(self.selection.index(), &viewport, align, &cells);
        debug!(index, offset = viewport.scroll_offset, "scroll settled");
        self.commit(index, &cells);

        if self.config.snap_on_settle && !self.config.free_drag {
            let target = aligned_offset(&cells[index], align, &viewport);
            if (target - viewport.scroll_offset).abs() > POSITION_EPSILON {
                self.effector.set_offset_animated(target);
            }
        }
    }

    fn jump(&mut self, index: usize, animated: bool) -> bool {
        if self.drag.is_active() {
            return false;
        }
        let Some((cells, viewport)) = self.snapshot() else {
            return false;
        };
        let Some(last) = cells.len().checked_sub(1) else {
            return false;
        };
        let index = index.min(last);
        let cell = cells[index];
        let align = self.config.cell_align;
        if index == self.selection.index()
            && is_aligned_at(&cell, align, &viewport)
        {
            return false;
        }

        let offset = aligned_offset(&cell, align, &viewport);
        debug!(index, offset, animated, "go to cell");
        self.settle.cancel();
        self.effector.cancel_animation();
        self.commit(index, &cells);
        if animated {
            self.effector.set_offset_animated(offset);
        } else {
            self.effector.set_offset_immediate(offset);
        }
        true
    }

    fn can_navigate(&self, direction: NavDirection) -> bool {
        let Some(geometry) = self.geometry.as_ref() else {
            return false;
        };
        let count = geometry.cell_count();
        if count == 0 {
            return false;
        }
        if self.config.center_on_arrow_click {
            let current = self.selection.index();
            navigation::step_index(
                current,
                count,
                self.config.group_cells,
                direction,
            )
            .is_some_and(|target| target != current)
        } else {
            navigation::has_room(direction, &geometry.viewport())
        }
    }
}
