use crate::config::SandboxConfig;
use crate::sandbox::Sandbox;
use crate::{AppRuntime, AppSettings};
use std::error::Error;
use winit::dpi::{PhysicalSize, Size};
use winit::window::{Window, WindowAttributes};

/// Hooks an application implements to drive a [`Sandbox`].
///
/// `update` runs once per frame before the physics step, which makes it the
/// place to react to the input gathered during the frame.
#[allow(unused)]
pub trait AppState: Sized {
    fn init(&mut self, sandbox: &mut Sandbox, window: &Window) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
    fn update(&mut self, sandbox: &mut Sandbox, window: &Window) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
    fn destroy(&mut self, sandbox: &mut Sandbox, window: &Window) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

impl<S: AppState> AppRuntime for S {
    fn configure(self, title: &str, width: u32, height: u32) -> AppSettings<Self> {
        let mut config = SandboxConfig::default();
        config.environment.viewport.x = width;
        config.environment.viewport.y = height;

        AppSettings {
            window: WindowAttributes::default()
                .with_inner_size(Size::Physical(PhysicalSize { width, height }))
                .with_title(title),
            state: self,
            config,
        }
    }

    fn default_config(self) -> AppSettings<Self> {
        self.configure("BoxDrop", 800, 600)
    }
}
