use thiserror::Error;

/// Errors raised by the viewer.
///
/// Malformed scene data is never one of these: the scene builder falls back
/// to defaults instead. What remains are host and GPU failures.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("scene description is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("failed to read scene description: {0}")]
    Io(#[from] std::io::Error),

    #[error("generator response carries no model data")]
    MissingModelData,

    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("surface does not support this adapter")]
    UnsupportedSurface,

    #[error("render target error: {0}")]
    Target(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
