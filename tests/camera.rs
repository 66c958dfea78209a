use boxdrop::Camera2D;
use nalgebra::{Point2, Vector2};

fn framed_camera(center: Point2<f32>) -> Camera2D {
    let mut camera = Camera2D::new(50.0, 1.0);
    camera.reframe(800, 600);
    camera.center_on(center);
    camera
}

fn assert_close(a: Point2<f32>, b: Point2<f32>) {
    assert!((a - b).norm() < 1e-4, "{a:?} != {b:?}");
}

#[test]
fn top_left_maps_to_view_corner() {
    let camera = framed_camera(Point2::new(2.5, 4.0));

    assert_close(
        camera.screen_to_world_position(Point2::new(0.0, 0.0)),
        Point2::new(-5.5, 10.0),
    );
    assert_close(
        camera.screen_to_world_position(Point2::new(400.0, 300.0)),
        Point2::new(2.5, 4.0),
    );
    assert_close(
        camera.screen_to_world_position(Point2::new(800.0, 600.0)),
        Point2::new(10.5, -2.0),
    );
}

#[test]
fn screen_y_points_down() {
    let camera = framed_camera(Point2::origin());

    let upper = camera.screen_to_world_position(Point2::new(400.0, 100.0));
    let lower = camera.screen_to_world_position(Point2::new(400.0, 500.0));
    assert!(upper.y > lower.y);
}

#[test]
fn position_round_trips() {
    let camera = framed_camera(Point2::new(-3.0, 7.25));

    for p in [
        Point2::new(0.0, 0.0),
        Point2::new(123.5, 456.25),
        Point2::new(800.0, 600.0),
        Point2::new(-40.0, 900.0),
    ] {
        let world = camera.screen_to_world_position(p);
        assert_close(camera.world_to_screen_position(world), p);
    }

    for p in [Point2::new(0.0, 0.0), Point2::new(1.5, -2.0), Point2::new(-10.0, 30.0)] {
        let screen = camera.world_to_screen_position(p);
        assert_close(camera.screen_to_world_position(screen), p);
    }
}

#[test]
fn sizes_ignore_camera_center() {
    let a = framed_camera(Point2::origin());
    let b = framed_camera(Point2::new(100.0, -50.0));
    let size = Vector2::new(100.0, 50.0);

    assert_eq!(a.screen_to_world_size(size), b.screen_to_world_size(size));
    assert_eq!(a.screen_to_world_size(size), Vector2::new(2.0, 1.0));
    assert_eq!(a.world_to_screen_size(Vector2::new(2.0, 1.0)), size);
}

#[test]
fn zoom_scales_conversions() {
    let mut camera = framed_camera(Point2::origin());
    camera.set_zoom(2.0);
    assert_eq!(camera.scale(), 100.0);
    assert_eq!(
        camera.screen_to_world_size(Vector2::new(100.0, 100.0)),
        Vector2::new(1.0, 1.0)
    );

    camera.set_zoom(1000.0);
    assert_eq!(camera.zoom(), Camera2D::MAX_ZOOM);
    camera.set_zoom(0.0);
    assert_eq!(camera.zoom(), Camera2D::MIN_ZOOM);

    camera.set_zoom(f32::NAN);
    assert_eq!(camera.zoom(), Camera2D::MIN_ZOOM);
    assert_eq!(Camera2D::new(50.0, f32::INFINITY).zoom(), 1.0);
}

#[test]
fn scale_validity() {
    assert!(Camera2D::is_valid_scale(50.0));
    assert!(!Camera2D::is_valid_scale(0.0));
    assert!(!Camera2D::is_valid_scale(-1.0));
    assert!(!Camera2D::is_valid_scale(f32::NAN));
}

#[test]
fn reframe_keeps_screen_size() {
    let mut camera = framed_camera(Point2::origin());
    camera.reframe(1280, 720);

    let size = camera.screen_size();
    assert!((size.x - 1280.0).abs() < 1e-3);
    assert!((size.y - 720.0).abs() < 1e-3);

    let (top_left, bottom_right) = camera.view_bounds();
    assert_close(top_left, Point2::new(-12.8, 7.2));
    assert_close(bottom_right, Point2::new(12.8, -7.2));
}
