use snafu::Snafu;
use wgpu::{CreateSurfaceError, RequestAdapterError, RequestDeviceError, SurfaceError};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub))]
pub enum StateError {
    #[snafu(display("Unable to create a render surface for the window: {source}"))]
    CreateSurface { source: CreateSurfaceError },

    #[snafu(display("No graphics adapter compatible with the surface was found: {source}"))]
    RequestAdapter { source: RequestAdapterError },

    #[snafu(display("Unable to open a graphics device: {source}"))]
    RequestDevice { source: RequestDeviceError },

    #[snafu(display("The surface doesn't support the selected adapter"))]
    UnsupportedSurface,
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub))]
pub enum RenderError {
    #[snafu(display("Unable to get current surface texture: {source}"))]
    Surface { source: SurfaceError },

    #[snafu(display("Error with the render state: {source}"))]
    State { source: StateError },
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
