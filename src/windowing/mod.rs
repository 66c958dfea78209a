//! Platform windowing and event loop utilities.
//!
//! These helpers wrap `winit` window creation and the per-frame order of
//! input, physics and rendering into a compact runtime.

pub mod app;
pub mod state;

pub use app::*;
pub use state::*;
