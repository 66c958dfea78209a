use crate::camera::Camera2D;
use crate::rendering::target::RenderTarget;
use crate::rendering::vertex::Vertex2D;
use crate::shape::{Color, RenderShape};
use itertools::Itertools;
use nalgebra::{Point2, Vector2};

/// CPU side batch of colored triangles in pixel space.
///
/// Every shape is tessellated as it arrives so later shapes end up on top.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    vertices: Vec<Vertex2D>,
    view_size: Vector2<f32>,
    shape_count: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.shape_count = 0;
    }

    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    /// Pixel size of the view set for this frame.
    pub fn view_size(&self) -> Vector2<f32> {
        self.view_size
    }

    fn push_triangle(&mut self, a: Point2<f32>, b: Point2<f32>, c: Point2<f32>, color: Color) {
        self.vertices.extend([
            Vertex2D::new(a, color),
            Vertex2D::new(b, color),
            Vertex2D::new(c, color),
        ]);
    }

    fn push_fill(&mut self, points: &[Point2<f32>], color: Color) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };

        // fan around the first vertex, fine for the convex outlines we produce
        for (&b, &c) in rest.iter().tuple_windows() {
            self.push_triangle(first, b, c, color);
        }
    }

    fn push_outline(&mut self, points: &[Point2<f32>], color: Color, thickness: f32) {
        for (&a, &b) in points.iter().circular_tuple_windows() {
            let edge = b - a;
            let Some(direction) = edge.try_normalize(f32::EPSILON) else {
                continue;
            };
            let offset = Vector2::new(-direction.y, direction.x) * (thickness / 2.0);

            let (a0, a1) = (a - offset, a + offset);
            let (b0, b1) = (b - offset, b + offset);
            self.push_triangle(a0, b0, b1, color);
            self.push_triangle(a0, b1, a1, color);
        }
    }
}

impl RenderTarget for DrawList {
    fn set_view(&mut self, camera: &Camera2D) {
        self.view_size = camera.screen_size();
    }

    fn draw(&mut self, shape: &RenderShape) {
        let points: Vec<Point2<f32>> = shape.transformed_points().collect();
        if points.len() < 3 {
            return;
        }

        if shape.fill().a > 0 {
            self.push_fill(&points, shape.fill());
        }
        if shape.outline().a > 0 && shape.outline_thickness() > 0.0 {
            self.push_outline(&points, shape.outline(), shape.outline_thickness());
        }

        self.shape_count += 1;
    }
}
