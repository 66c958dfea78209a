use crate::camera::CameraTarget;
use crate::shape::{Color, ShapeStyle};
use bon::Builder;
use nalgebra::{Point2, Vector2};
use std::time::Duration;

/// Solver budget per physics step.
///
/// `velocity` maps to rapier's main solver iterations and `position` to its
/// internal stabilization iterations. Higher position counts tighten contact
/// resolution at a CPU cost.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolverIterations {
    pub velocity: usize,
    pub position: usize,
}

impl Default for SolverIterations {
    fn default() -> Self {
        SolverIterations {
            velocity: 8,
            position: 3,
        }
    }
}

/// Collider material shared by every spawned box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxMaterial {
    pub density: f32,
    pub friction: f32,
}

impl Default for BoxMaterial {
    fn default() -> Self {
        BoxMaterial {
            density: 1.0,
            friction: 0.2,
        }
    }
}

pub const DEFAULT_PIXELS_PER_METER: f32 = 50.0;

#[derive(Debug, Clone, Builder)]
pub struct EnvironmentConfig {
    /// Must be positive and finite, other values fall back to
    /// [`DEFAULT_PIXELS_PER_METER`].
    #[builder(default = DEFAULT_PIXELS_PER_METER)]
    pub pixels_per_meter: f32,
    #[builder(default = 1.0)]
    pub zoom: f32,
    #[builder(default = Vector2::new(0.0, -9.8))]
    pub gravity: Vector2<f32>,
    #[builder(default)]
    pub iterations: SolverIterations,
    #[builder(default)]
    pub material: BoxMaterial,
    #[builder(default = ShapeStyle::filled(Color::rgba(0, 0, 100, 100)))]
    pub dynamic_style: ShapeStyle,
    #[builder(default = ShapeStyle::filled(Color::rgba(0, 100, 0, 100)))]
    pub static_style: ShapeStyle,
    #[builder(default = CameraTarget::Fixed(Point2::new(2.5, 4.0)))]
    pub camera_target: CameraTarget,
    /// Surface size used to frame the camera before the first render.
    #[builder(default = Vector2::new(800, 600))]
    pub viewport: Vector2<u32>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig::builder().build()
    }
}

#[derive(Debug, Clone, Builder)]
pub struct SandboxConfig {
    #[builder(default)]
    pub environment: EnvironmentConfig,
    #[builder(default = Color::CORNFLOWER_BLUE)]
    pub clear_color: Color,
    /// Upper bound for a single frame's simulated time.
    #[builder(default = Duration::from_millis(100))]
    pub max_frame_time: Duration,
    /// Steps in fixed increments instead of once per frame when set.
    pub fixed_timestep: Option<Duration>,
    /// Drags no larger than this on both axes are discarded.
    #[builder(default = 1.0)]
    pub min_drag_pixels: f32,
    #[builder(default = ShapeStyle::filled(Color::rgba(255, 255, 255, 40)).with_outline(Color::WHITE, 1.0))]
    pub drag_preview_style: ShapeStyle,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        SandboxConfig::builder().build()
    }
}
