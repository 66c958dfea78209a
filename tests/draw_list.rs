use boxdrop::Camera2D;
use boxdrop::rendering::{DrawList, RenderTarget};
use boxdrop::shape::{Color, RenderShape, ShapeStyle};
use nalgebra::{Point2, Vector2, Vector4};

#[test]
fn filled_rectangle_is_two_triangles() {
    let mut list = DrawList::new();
    let shape = RenderShape::rectangle(2.0, 1.0, ShapeStyle::filled(Color::rgb(255, 0, 0)));

    assert_eq!(shape.points().len(), 4);
    list.draw(&shape);

    assert_eq!(list.shape_count(), 1);
    assert_eq!(list.vertices().len(), 6);
    for vertex in list.vertices() {
        assert_eq!(vertex.color, Vector4::new(1.0, 0.0, 0.0, 1.0));
    }
}

#[test]
fn outline_adds_a_quad_per_edge() {
    let mut list = DrawList::new();
    let style = ShapeStyle::filled(Color::BLACK).with_outline(Color::WHITE, 2.0);
    list.draw(&RenderShape::rectangle(10.0, 10.0, style));
    assert_eq!(list.vertices().len(), 6 + 24);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.shape_count(), 0);

    let outline_only = ShapeStyle::filled(Color::TRANSPARENT).with_outline(Color::WHITE, 2.0);
    list.draw(&RenderShape::rectangle(10.0, 10.0, outline_only));
    assert_eq!(list.vertices().len(), 24);
}

#[test]
fn degenerate_shapes_are_skipped() {
    let mut list = DrawList::new();
    let line = RenderShape::polygon(
        vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)],
        ShapeStyle::filled(Color::WHITE),
    );

    list.draw(&line);
    assert!(list.is_empty());
    assert_eq!(list.shape_count(), 0);
}

#[test]
fn vertices_are_transformed() {
    let mut list = DrawList::new();
    let mut shape = RenderShape::rectangle(2.0, 1.0, ShapeStyle::filled(Color::WHITE));
    shape.set_position(Point2::new(10.0, 20.0));
    shape.set_scale(Vector2::new(50.0, -50.0));

    list.draw(&shape);

    for vertex in list.vertices() {
        assert!(((vertex.position.x - 10.0).abs() - 50.0).abs() < 1e-3);
        assert!(((vertex.position.y - 20.0).abs() - 25.0).abs() < 1e-3);
    }
}

#[test]
fn quarter_turn_swaps_extents() {
    let mut shape = RenderShape::rectangle(4.0, 2.0, ShapeStyle::filled(Color::WHITE));
    shape.set_rotation(90.0);

    for p in shape.transformed_points() {
        assert!((p.x.abs() - 1.0).abs() < 1e-4);
        assert!((p.y.abs() - 2.0).abs() < 1e-4);
    }
}

#[test]
fn view_size_comes_from_camera() {
    let mut camera = Camera2D::new(50.0, 1.0);
    camera.reframe(1024, 768);

    let mut list = DrawList::new();
    list.set_view(&camera);

    assert!((list.view_size().x - 1024.0).abs() < 1e-3);
    assert!((list.view_size().y - 768.0).abs() < 1e-3);
}
