//! A small 2D physics sandbox: drag out boxes with the mouse and watch them
//! fall onto the ground.
//!
//! [`Environment`] bridges the rapier physics world and the drawn shapes,
//! [`Sandbox`] drives it frame by frame and [`AppSettings::run`] opens the
//! window and runs the event loop.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod engine;
pub mod utils;
pub mod windowing;

pub use engine::*;
pub use windowing::*;

pub use ::log;
pub use ::winit;
