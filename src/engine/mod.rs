pub mod camera;
pub mod config;
pub mod environment;
pub mod input;
pub mod physics;
pub mod rendering;
pub mod sandbox;
pub mod shape;

pub use self::camera::{Camera2D, CameraTarget};
pub use self::config::*;
pub use self::environment::*;
pub use self::sandbox::Sandbox;
