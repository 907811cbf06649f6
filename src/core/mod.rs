pub mod backend;
pub mod clock;
pub mod gpu_context;
pub mod mesh_buffers;
pub mod mount;
pub mod scheduler;
pub mod surface_renderer;
pub mod viewport;

pub use backend::{RenderBackend, RenderTarget};
pub use clock::{Clock, FpsCounter};
pub use gpu_context::GpuContext;
pub use mesh_buffers::{GpuMesh, MeshBuffers};
pub use mount::{MountPoint, SurfaceId, ViewportSize};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use surface_renderer::SurfaceRenderer;
pub use viewport::Viewport;
