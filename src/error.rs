use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,
}

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface not supported by adapter")]
    UnsupportedSurface,
}
