//! Drawable polygons living in screen space.
//!
//! A [`RenderShape`] stores its raw outline in local units and a separate
//! position / rotation / scale transform. The transform is what the
//! [`Environment`](crate::Environment) rewrites every frame from the paired
//! body's pose, the local outline never changes after construction.

use nalgebra::{Point2, Rotation2, Vector2};

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_f32_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// Fill and outline settings applied to a shape when it is created.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
}

impl ShapeStyle {
    pub const fn filled(fill: Color) -> Self {
        ShapeStyle {
            fill,
            outline: Color::TRANSPARENT,
            outline_thickness: 0.0,
        }
    }

    pub const fn with_outline(mut self, outline: Color, thickness: f32) -> Self {
        self.outline = outline;
        self.outline_thickness = thickness;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderShape {
    points: Vec<Point2<f32>>,
    fill: Color,
    outline: Color,
    outline_thickness: f32,
    position: Point2<f32>,
    rotation: f32,
    scale: Vector2<f32>,
}

impl RenderShape {
    /// Creates a closed polygon from an ordered vertex list.
    pub fn polygon(points: Vec<Point2<f32>>, style: ShapeStyle) -> Self {
        RenderShape {
            points,
            fill: style.fill,
            outline: style.outline,
            outline_thickness: style.outline_thickness,
            position: Point2::origin(),
            rotation: 0.0,
            scale: Vector2::new(1.0, 1.0),
        }
    }

    /// A `width` x `height` rectangle centered on the local origin.
    pub fn rectangle(width: f32, height: f32, style: ShapeStyle) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;

        Self::polygon(
            vec![
                Point2::new(-hw, -hh),
                Point2::new(hw, -hh),
                Point2::new(hw, hh),
                Point2::new(-hw, hh),
            ],
            style,
        )
    }

    pub fn points(&self) -> &[Point2<f32>] {
        &self.points
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn outline(&self) -> Color {
        self.outline
    }

    pub fn outline_thickness(&self) -> f32 {
        self.outline_thickness
    }

    pub fn position(&self) -> Point2<f32> {
        self.position
    }

    /// Rotation in degrees. Positive values turn clockwise on screen.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> Vector2<f32> {
        self.scale
    }

    pub fn set_position(&mut self, position: Point2<f32>) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn set_scale(&mut self, scale: Vector2<f32>) {
        self.scale = scale;
    }

    /// Size of the axis aligned bounds of the untransformed outline.
    pub fn local_extent(&self) -> Vector2<f32> {
        let Some(first) = self.points.first() else {
            return Vector2::zeros();
        };

        let (min, max) = self
            .points
            .iter()
            .fold((*first, *first), |(min, max), p| {
                (
                    Point2::new(min.x.min(p.x), min.y.min(p.y)),
                    Point2::new(max.x.max(p.x), max.y.max(p.y)),
                )
            });

        max - min
    }

    /// Applies scale, then rotation, then translation to a local point.
    pub fn transform_point(&self, local: &Point2<f32>) -> Point2<f32> {
        let scaled = local.coords.component_mul(&self.scale);
        let rotated = Rotation2::new(self.rotation.to_radians()) * scaled;
        self.position + rotated
    }

    pub fn transformed_points(&self) -> impl Iterator<Item = Point2<f32>> + '_ {
        self.points.iter().map(|p| self.transform_point(p))
    }
}
