//! Drag with the left mouse button to drop a box, right click a box to
//! remove it, scroll to zoom and press escape to quit.

use boxdrop::input::DragSpawner;
use boxdrop::log::{error, info};
use boxdrop::{AppRuntime, AppSettings, AppState, Sandbox};
use std::error::Error;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;
use winit::window::Window;

const ZOOM_STEP: f32 = 1.1;

#[derive(Debug, Default)]
struct BoxDrop {
    spawner: DragSpawner,
    shown_count: Option<usize>,
}

impl BoxDrop {
    fn handle_drag(&mut self, sandbox: &mut Sandbox) {
        let cursor = sandbox.input.mouse_position();

        if sandbox.input.is_button_down(MouseButton::Left) {
            self.spawner.press(cursor);
        } else if sandbox.input.is_button_released(MouseButton::Left) {
            if let Some(id) = self.spawner.release(cursor, &mut sandbox.environment) {
                info!("Dropped box {id}");
            }
        } else if sandbox.input.is_button_pressed(MouseButton::Left) {
            self.spawner.drag_to(cursor);
        }

        let style = sandbox.config().drag_preview_style;
        sandbox.overlay = self.spawner.preview(style);
    }

    fn handle_removal(&mut self, sandbox: &mut Sandbox) {
        if !sandbox.input.is_button_down(MouseButton::Right) {
            return;
        }

        let cursor = sandbox.input.mouse_position();
        if let Some(id) = sandbox.environment.object_at_screen(cursor) {
            sandbox.environment.remove_object(id);
            info!("Removed box {id}");
        }
    }

    fn handle_zoom(&mut self, sandbox: &mut Sandbox) {
        let wheel = sandbox.input.wheel_delta();
        if wheel == 0.0 {
            return;
        }

        let camera = sandbox.environment.camera_mut();
        let zoom = camera.zoom() * ZOOM_STEP.powf(wheel);
        camera.set_zoom(zoom);
    }

    fn update_title(&mut self, sandbox: &Sandbox, window: &Window) {
        let count = sandbox.environment.len();
        if self.shown_count != Some(count) {
            window.set_title(&format!("BoxDrop - {count} boxes"));
            self.shown_count = Some(count);
        }
    }
}

impl AppState for BoxDrop {
    fn init(&mut self, sandbox: &mut Sandbox, _window: &Window) -> Result<(), Box<dyn Error>> {
        self.spawner = DragSpawner::new(sandbox.config().min_drag_pixels);
        sandbox.environment.spawn_default_scene()?;
        Ok(())
    }

    fn update(&mut self, sandbox: &mut Sandbox, window: &Window) -> Result<(), Box<dyn Error>> {
        if sandbox.input.is_key_down(KeyCode::Escape) {
            sandbox.shutdown();
            return Ok(());
        }

        self.handle_drag(sandbox);
        self.handle_removal(sandbox);
        self.handle_zoom(sandbox);
        self.update_title(sandbox, window);

        Ok(())
    }
}

fn main() {
    let app = AppRuntime::configure(BoxDrop::default(), "BoxDrop", 800, 600);

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = AppSettings::run(app) {
        error!("{e}");
        std::process::exit(1);
    }
}
