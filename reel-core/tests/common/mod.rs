//! Shared harness for engine integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use reel_core::{
    CarouselConfig, CarouselEngine, Cell, HeadlessSurface, ScrollRequest,
};

pub type Surface = Rc<RefCell<HeadlessSurface>>;
pub type Engine = CarouselEngine<Surface, Surface>;

/// Engine over one shared headless surface, with every selection change
/// recorded in order.
pub struct Rig {
    pub engine: Engine,
    pub surface: Surface,
    pub selections: Rc<RefCell<Vec<usize>>>,
    pub t0: Instant,
}

impl Rig {
    /// 5 cells, 256 wide, 16 apart (pitch 272), viewport 800.
    pub fn reference(config: CarouselConfig) -> Self {
        Self::with_surface(
            HeadlessSurface::uniform(5, 256.0, 16.0, 800.0),
            config,
        )
    }

    pub fn with_surface(
        surface: HeadlessSurface,
        config: CarouselConfig,
    ) -> Self {
        init_tracing();
        let surface = Rc::new(RefCell::new(surface));
        let mut engine = CarouselEngine::with_geometry(
            config,
            Rc::clone(&surface),
            Rc::clone(&surface),
        )
        .expect("valid config");

        let selections = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selections);
        engine.subscribe(move |index: usize, _: Option<&Cell>| {
            sink.borrow_mut().push(index)
        });

        Self {
            engine,
            surface,
            selections,
            t0: Instant::now(),
        }
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.t0 + Duration::from_millis(ms)
    }

    pub fn offset(&self) -> f32 {
        self.surface.borrow().scroll_offset()
    }

    pub fn selections(&self) -> Vec<usize> {
        self.selections.borrow().clone()
    }

    pub fn take_requests(&self) -> Vec<ScrollRequest> {
        self.surface.borrow_mut().take_requests()
    }

    /// Simulate the host reporting a native scroll to `offset` at `ms`.
    pub fn native_scroll(&mut self, offset: f32, ms: u64) {
        self.surface.borrow_mut().scroll_to(offset);
        let now = self.at(ms);
        self.engine.on_scroll(now);
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "off".into()),
        )
        .with_test_writer()
        .try_init();
}
