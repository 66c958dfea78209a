use boxdrop::Environment;
use boxdrop::input::DragSpawner;
use boxdrop::shape::{Color, ShapeStyle};
use nalgebra::{Point2, Vector2};

fn assert_near(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "{a} != {b}");
}

#[test]
fn tiny_drag_is_dropped() {
    let mut env = Environment::default();
    let mut spawner = DragSpawner::default();

    spawner.press(Point2::new(100.0, 100.0));
    assert!(spawner.is_dragging());
    assert_eq!(spawner.release(Point2::new(100.5, 101.0), &mut env), None);

    assert!(!spawner.is_dragging());
    assert!(env.is_empty());
}

#[test]
fn drag_spawns_box_at_midpoint() {
    let mut env = Environment::default();
    let mut spawner = DragSpawner::default();

    spawner.press(Point2::new(100.0, 100.0));
    spawner.drag_to(Point2::new(150.0, 120.0));
    let id = spawner
        .release(Point2::new(200.0, 150.0), &mut env)
        .unwrap();

    assert_eq!(env.len(), 1);
    let object = env.object(id).unwrap();
    assert!(object.is_dynamic());
    assert_eq!(object.shape().local_extent(), Vector2::new(2.0, 1.0));

    let expected = env.screen_to_world_position(Point2::new(150.0, 125.0));
    let pose = env.body_pose(id).unwrap();
    assert_near(pose.translation.x, expected.x);
    assert_near(pose.translation.y, expected.y);
    assert_near(pose.translation.x, -2.5);
    assert_near(pose.translation.y, 7.5);
}

#[test]
fn drag_direction_does_not_matter() {
    let mut env = Environment::default();
    let mut spawner = DragSpawner::default();

    spawner.press(Point2::new(200.0, 150.0));
    let id = spawner
        .release(Point2::new(100.0, 100.0), &mut env)
        .unwrap();

    let pose = env.body_pose(id).unwrap();
    assert_near(pose.translation.x, -2.5);
    assert_near(pose.translation.y, 7.5);
    assert_eq!(
        env.object(id).unwrap().shape().local_extent(),
        Vector2::new(2.0, 1.0)
    );
}

#[test]
fn flat_drag_gets_minimum_height() {
    let mut env = Environment::default();
    let mut spawner = DragSpawner::default();

    spawner.press(Point2::new(100.0, 100.0));
    let id = spawner
        .release(Point2::new(300.0, 100.0), &mut env)
        .unwrap();

    let extent = env.object(id).unwrap().shape().local_extent();
    assert_near(extent.x, 4.0);
    assert_near(extent.y, 1.0 / 50.0);
}

#[test]
fn zero_minimum_still_spawns_flat_drag() {
    let mut env = Environment::default();
    let mut spawner = DragSpawner::new(0.0);

    spawner.press(Point2::new(100.0, 100.0));
    let id = spawner
        .release(Point2::new(300.0, 100.0), &mut env)
        .unwrap();

    assert_eq!(env.len(), 1);
    let extent = env.object(id).unwrap().shape().local_extent();
    assert_near(extent.x, 4.0);
    assert_near(extent.y, 1.0 / 50.0);
}

#[test]
fn release_without_press_does_nothing() {
    let mut env = Environment::default();
    let mut spawner = DragSpawner::default();

    assert_eq!(spawner.release(Point2::new(300.0, 300.0), &mut env), None);

    spawner.press(Point2::new(0.0, 0.0));
    spawner.cancel();
    assert!(!spawner.is_dragging());
    assert_eq!(spawner.release(Point2::new(300.0, 300.0), &mut env), None);
    assert!(env.is_empty());
}

#[test]
fn custom_minimum_extent() {
    let mut env = Environment::default();
    let mut spawner = DragSpawner::new(10.0);
    assert_eq!(spawner.min_extent(), 10.0);

    spawner.press(Point2::new(0.0, 0.0));
    assert_eq!(spawner.release(Point2::new(8.0, 9.0), &mut env), None);

    spawner.press(Point2::new(0.0, 0.0));
    assert!(spawner.release(Point2::new(12.0, 3.0), &mut env).is_some());
    assert_eq!(env.len(), 1);
}

#[test]
fn preview_covers_dragged_rectangle() {
    let style = ShapeStyle::filled(Color::rgba(255, 255, 255, 40));
    let mut spawner = DragSpawner::default();
    assert!(spawner.preview(style).is_none());

    spawner.press(Point2::new(100.0, 100.0));
    assert!(spawner.preview(style).is_none());

    spawner.drag_to(Point2::new(200.0, 150.0));
    let preview = spawner.preview(style).unwrap();
    assert_eq!(preview.position(), Point2::new(150.0, 125.0));
    assert_eq!(preview.local_extent(), Vector2::new(100.0, 50.0));
    assert_eq!(preview.fill(), style.fill);

    spawner.cancel();
    assert!(spawner.preview(style).is_none());
}
