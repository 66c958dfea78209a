use crate::AppState;
use crate::config::SandboxConfig;
use crate::rendering::Renderer;
use crate::sandbox::Sandbox;
use futures::executor::block_on;
use log::{error, info};
use std::error::Error;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, WindowAttributes, WindowId};

pub struct App<S: AppState> {
    renderer: Option<Renderer>,
    sandbox: Sandbox,
    window_attributes: WindowAttributes,
    state: S,
}

pub struct AppSettings<S: AppState> {
    pub window: WindowAttributes,
    pub state: S,
    pub config: SandboxConfig,
}

pub trait AppRuntime: AppState {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self>;

    fn default_config(self) -> AppSettings<Self>;
}

impl<S: AppState> AppSettings<S> {
    /// Borderless fullscreen on the current monitor.
    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        let mode = fullscreen.then_some(Fullscreen::Borderless(None));
        self.window = self.window.with_fullscreen(mode);
        self
    }

    pub fn with_config(mut self, config: SandboxConfig) -> Self {
        self.config = config;
        self
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let (event_loop, app) = self.init_state()?;
        app.run(event_loop)
    }

    fn init_state(self) -> Result<(EventLoop<()>, App<S>), Box<dyn Error>> {
        let event_loop = match EventLoop::new() {
            Err(EventLoopError::NotSupported(_)) => {
                return Err("No graphics backend found that could be used.".into());
            }
            e => e?,
        };
        event_loop.set_control_flow(ControlFlow::Poll);

        let app = App {
            renderer: None,
            sandbox: Sandbox::new(self.config),
            window_attributes: self.window,
            state: self.state,
        };

        Ok((event_loop, app))
    }
}

impl<S: AppState> App<S> {
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), Box<dyn Error>> {
        event_loop.run_app(&mut self)?;
        Ok(())
    }
}

impl<S: AppState> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        info!("(Re)initializing render state!");
        let window = match event_loop.create_window(self.window_attributes.clone()) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Couldn't create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let clear_color = self.sandbox.config().clear_color;
        let renderer = match block_on(Renderer::new(window, clear_color)) {
            Ok(r) => r,
            Err(e) => {
                error!("Error when creating renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.state.init(&mut self.sandbox, renderer.window()) {
            error!("Sandbox init function hook returned: {e}");
            event_loop.exit();
            return;
        }

        renderer.window().request_redraw();
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if event_loop.exiting() {
            return;
        }

        let Some(renderer) = self.renderer.as_mut() else {
            error!("No renderer.");
            return;
        };
        if self.sandbox.is_shutting_down() {
            event_loop.exit();
            return;
        }

        if window_id != renderer.window().id() {
            return;
        }

        self.sandbox.input.process_event(&event);

        match event {
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.state.update(&mut self.sandbox, renderer.window()) {
                    error!("Error happened when calling update function hook: {e}");
                }

                self.sandbox.update();
                if !renderer.render_sandbox(&mut self.sandbox) {
                    event_loop.exit();
                }
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => renderer.resize(size),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_ref() else {
            return;
        };

        if let Err(e) = self.state.destroy(&mut self.sandbox, renderer.window()) {
            error!("Error happened when calling destroy function hook: {e}");
        }
        info!("Shutting down with {} objects", self.sandbox.environment.len());
    }
}
