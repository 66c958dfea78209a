//! Handling of keyboard and mouse input.
//!
//! [`InputManager`] tracks key states and mouse movement for the current
//! frame. [`DragSpawner`] turns a pointer drag into a new box.

pub mod drag;
pub mod input_manager;

pub use self::drag::*;
pub use self::input_manager::*;
