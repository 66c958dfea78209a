//! Screen/world coordinate mapping.
//!
//! Screen space is measured in pixels with the origin in the top left corner
//! and Y pointing down. World space is measured in meters with Y pointing up.
//! Positions go through the camera center and the axis flip, sizes are only
//! scaled. Keeping the two apart means a width or height never picks up a
//! camera offset.

use crate::ObjectId;
use nalgebra::{Point2, Vector2};

/// What the camera recenters on every frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CameraTarget {
    Fixed(Point2<f32>),
    Object(ObjectId),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2D {
    center: Point2<f32>,
    half_extents: Vector2<f32>,
    pixels_per_meter: f32,
    zoom: f32,
}

impl Camera2D {
    pub const MIN_ZOOM: f32 = 0.05;
    pub const MAX_ZOOM: f32 = 20.0;

    /// `pixels_per_meter` must be positive and finite, every conversion
    /// divides by it. A non-finite `zoom` falls back to 1.
    pub fn new(pixels_per_meter: f32, zoom: f32) -> Self {
        let mut camera = Camera2D {
            center: Point2::origin(),
            half_extents: Vector2::zeros(),
            pixels_per_meter,
            zoom: 1.0,
        };
        camera.set_zoom(zoom);
        camera
    }

    pub fn is_valid_scale(pixels_per_meter: f32) -> bool {
        pixels_per_meter.is_finite() && pixels_per_meter > 0.0
    }

    /// Pixels per meter after zoom.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.pixels_per_meter * self.zoom
    }

    pub fn pixels_per_meter(&self) -> f32 {
        self.pixels_per_meter
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Clamped to `MIN_ZOOM..=MAX_ZOOM`. NaN and infinite values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        }
    }

    pub fn center(&self) -> Point2<f32> {
        self.center
    }

    /// Half the visible area, in meters.
    pub fn half_extents(&self) -> Vector2<f32> {
        self.half_extents
    }

    /// The framed surface size in pixels.
    pub fn screen_size(&self) -> Vector2<f32> {
        self.half_extents * (2.0 * self.scale())
    }

    pub fn center_on(&mut self, center: Point2<f32>) {
        self.center = center;
    }

    /// Recomputes the visible area for a render surface of the given size.
    pub fn reframe(&mut self, width: u32, height: u32) {
        let scale = self.scale();
        self.half_extents = Vector2::new(
            width as f32 / scale / 2.0,
            height as f32 / scale / 2.0,
        );
    }

    /// Top left and bottom right corners of the view in world space.
    pub fn view_bounds(&self) -> (Point2<f32>, Point2<f32>) {
        (
            Point2::new(
                self.center.x - self.half_extents.x,
                self.center.y + self.half_extents.y,
            ),
            Point2::new(
                self.center.x + self.half_extents.x,
                self.center.y - self.half_extents.y,
            ),
        )
    }

    pub fn screen_to_world_position(&self, p: Point2<f32>) -> Point2<f32> {
        let scale = self.scale();
        Point2::new(
            self.center.x - self.half_extents.x + p.x / scale,
            self.center.y + self.half_extents.y - p.y / scale,
        )
    }

    pub fn world_to_screen_position(&self, p: Point2<f32>) -> Point2<f32> {
        let scale = self.scale();
        Point2::new(
            (p.x - self.center.x + self.half_extents.x) * scale,
            (self.center.y + self.half_extents.y - p.y) * scale,
        )
    }

    pub fn screen_to_world_size(&self, size: Vector2<f32>) -> Vector2<f32> {
        size / self.scale()
    }

    pub fn world_to_screen_size(&self, size: Vector2<f32>) -> Vector2<f32> {
        size * self.scale()
    }
}
