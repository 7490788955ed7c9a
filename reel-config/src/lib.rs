//! Configuration loading for reel carousels.
//!
//! Hosts usually call [`CarouselConfigLoader::load_from_env`] once at
//! startup, install logging with [`init_tracing`], and hand the resulting
//! [`CarouselConfig`](reel_model::CarouselConfig) to the engine.

pub mod loader;
pub mod logging;

pub use loader::{CarouselConfigLoader, ConfigSource};
pub use logging::init_tracing;
