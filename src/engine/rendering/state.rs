use super::error::*;
use log::info;
use snafu::{OptionExt, ResultExt};
use std::sync::Arc;
use wgpu::{
    Adapter, Device, DeviceDescriptor, Instance, InstanceDescriptor, PowerPreference, Queue,
    RequestAdapterOptions, Surface, SurfaceConfiguration,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// The wgpu objects tied to one window.
pub struct State {
    pub surface: Surface<'static>,
    pub adapter: Adapter,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
}

impl State {
    pub async fn new(window: Arc<Window>) -> Result<Self, StateError> {
        let size = window.inner_size();

        let instance = Instance::new(&InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context(CreateSurfaceErr)?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .context(RequestAdapterErr)?;

        info!("Using graphics adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&DeviceDescriptor {
                label: Some("BoxDrop Device"),
                ..DeviceDescriptor::default()
            })
            .await
            .context(RequestDeviceErr)?;

        let config = Self::surface_config(&surface, &adapter, size)?;
        surface.configure(&device, &config);

        Ok(State {
            surface,
            adapter,
            device,
            queue,
            config,
            size,
        })
    }

    fn surface_config(
        surface: &Surface,
        adapter: &Adapter,
        size: PhysicalSize<u32>,
    ) -> Result<SurfaceConfiguration, StateError> {
        surface
            .get_default_config(adapter, size.width.max(1), size.height.max(1))
            .context(UnsupportedSurfaceErr)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.recreate_surface();
    }

    pub fn recreate_surface(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}
