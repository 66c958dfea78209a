use boxdrop::{Sandbox, SandboxConfig};
use std::time::Duration;
use winit::event::{ElementState, MouseButton};

#[test]
fn frame_time_is_clamped() {
    let mut sandbox = Sandbox::default();

    assert_eq!(sandbox.advance(Duration::from_secs(2)), 1);
    assert_eq!(sandbox.delta_time(), Duration::from_millis(100));

    assert_eq!(sandbox.advance(Duration::from_millis(16)), 1);
    assert_eq!(sandbox.delta_time(), Duration::from_millis(16));

    assert_eq!(sandbox.advance(Duration::ZERO), 0);
}

#[test]
fn clamped_frame_matches_maximum_frame() {
    let mut long = Sandbox::default();
    let mut capped = Sandbox::default();
    let a = long.environment.create_box(1.0, 1.0, 0.0, 10.0, true).unwrap();
    let b = capped.environment.create_box(1.0, 1.0, 0.0, 10.0, true).unwrap();

    long.advance(Duration::from_secs(5));
    capped.advance(Duration::from_millis(100));

    let long_pose = long.environment.body_pose(a).unwrap();
    let capped_pose = capped.environment.body_pose(b).unwrap();
    assert!((long_pose.translation - capped_pose.translation).norm() < 1e-6);
    assert!(long_pose.translation.y < 10.0);
}

#[test]
fn fixed_timestep_accumulates() {
    let config = SandboxConfig::builder()
        .fixed_timestep(Duration::from_millis(10))
        .build();
    let mut sandbox = Sandbox::new(config);

    assert_eq!(sandbox.advance(Duration::from_millis(35)), 3);
    assert_eq!(sandbox.accumulated_time(), Duration::from_millis(5));

    assert_eq!(sandbox.advance(Duration::from_millis(5)), 1);
    assert_eq!(sandbox.accumulated_time(), Duration::ZERO);

    assert_eq!(sandbox.advance(Duration::from_millis(4)), 0);
}

#[test]
fn advance_ends_input_frame() {
    let mut sandbox = Sandbox::default();

    sandbox.input.set_button_state(MouseButton::Left, ElementState::Pressed);
    assert!(sandbox.input.is_button_down(MouseButton::Left));

    sandbox.advance(Duration::from_millis(16));
    assert!(!sandbox.input.is_button_down(MouseButton::Left));
    assert!(sandbox.input.is_button_pressed(MouseButton::Left));
}

#[test]
fn shutdown_is_sticky() {
    let mut sandbox = Sandbox::default();
    assert!(!sandbox.is_shutting_down());

    sandbox.shutdown();
    sandbox.advance(Duration::from_millis(16));
    assert!(sandbox.is_shutting_down());
}

#[test]
fn update_measures_wall_clock() {
    let mut sandbox = Sandbox::default();
    std::thread::sleep(Duration::from_millis(1));
    sandbox.update();

    assert!(sandbox.delta_time() > Duration::ZERO);
    assert!(sandbox.delta_time() <= Duration::from_millis(100));
    assert!(sandbox.time() >= sandbox.delta_time());
}
