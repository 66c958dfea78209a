use crate::camera::Camera2D;
use crate::shape::RenderShape;

/// Something shapes can be drawn onto.
///
/// Shapes arrive already transformed into pixel space, in draw order. The view
/// is set once per frame before the first shape.
pub trait RenderTarget {
    fn set_view(&mut self, camera: &Camera2D);
    fn draw(&mut self, shape: &RenderShape);
}
