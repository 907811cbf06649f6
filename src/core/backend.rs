use crate::error::Result;
use crate::scene::Scene;

use super::mount::{SurfaceId, ViewportSize};

/// A live output surface plus the GPU resources behind it.
///
/// Dropping a target releases those resources and its surface.
pub trait RenderTarget {
    /// Surface this target draws into
    fn surface_id(&self) -> SurfaceId;

    /// Draw one frame of `scene`
    fn render(&mut self, scene: &Scene) -> Result<()>;

    /// Match a new viewport size
    fn resize(&mut self, size: ViewportSize);
}

/// Creates render targets for a viewport
pub trait RenderBackend {
    type Target: RenderTarget;

    fn create_target(&mut self, size: ViewportSize) -> Result<Self::Target>;
}
