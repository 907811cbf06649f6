use std::sync::Arc;

use wgpu::Surface;
use winit::window::Window;

use crate::config::ViewerConfig;
use crate::core::{
    FrameHandle, FrameScheduler, GpuContext, MountPoint, RenderBackend, SurfaceId,
    SurfaceRenderer, ViewportSize,
};
use crate::error::Result;

/// A winit window acting as the viewer's mount point
pub struct WindowMount {
    window: Arc<Window>,
    attached: Vec<SurfaceId>,
}

impl WindowMount {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            attached: Vec::new(),
        }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl MountPoint for WindowMount {
    fn size(&self) -> ViewportSize {
        let size = self.window.inner_size();
        ViewportSize::new(size.width, size.height)
    }

    fn attach(&mut self, surface: SurfaceId) {
        self.attached.clear();
        self.attached.push(surface);
    }

    fn detach(&mut self, surface: SurfaceId) {
        self.attached.retain(|s| *s != surface);
    }

    fn attached(&self) -> &[SurfaceId] {
        &self.attached
    }
}

/// Frame scheduling on top of winit redraw requests.
///
/// The event loop takes the due handle on `RedrawRequested` and passes it
/// back to the viewport. A cancelled handle is simply never handed out.
pub struct RedrawScheduler {
    window: Arc<Window>,
    next: u64,
    pending: Option<FrameHandle>,
}

impl RedrawScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next: 0,
            pending: None,
        }
    }

    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        self.window.request_redraw();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// Creates wgpu surface renderers for one window
pub struct WgpuBackend {
    gpu: GpuContext,
    window: Arc<Window>,
    sample_count: u32,
    shadow_map_size: u32,
    next_id: u64,
    /// Surface used to pick the adapter, handed to the first target
    spare: Option<Surface<'static>>,
}

impl WgpuBackend {
    pub async fn new(window: Arc<Window>, config: &ViewerConfig) -> Result<Self> {
        let instance = GpuContext::create_instance();
        let surface = instance.create_surface(window.clone())?;
        let gpu = GpuContext::new_with_surface(instance, &surface).await?;

        Ok(Self {
            gpu,
            window,
            sample_count: config.sample_count(),
            shadow_map_size: config.shadow_map_size,
            next_id: 0,
            spare: Some(surface),
        })
    }

    pub fn gpu(&self) -> &GpuContext {
        &self.gpu
    }
}

impl RenderBackend for WgpuBackend {
    type Target = SurfaceRenderer;

    fn create_target(&mut self, size: ViewportSize) -> Result<SurfaceRenderer> {
        let surface = match self.spare.take() {
            Some(surface) => surface,
            None => self.gpu.instance().create_surface(self.window.clone())?,
        };

        self.next_id += 1;
        SurfaceRenderer::new(
            SurfaceId(self.next_id),
            self.gpu.clone(),
            surface,
            size,
            self.sample_count,
            self.shadow_map_size,
        )
    }
}
