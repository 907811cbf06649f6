use std::fmt;

/// Viewport size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Identity of an output surface produced by a render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Host container the viewer draws into while it is active
pub trait MountPoint {
    /// Size the viewer should render at
    fn size(&self) -> ViewportSize;

    /// Show `surface`, replacing whatever the mount point held before
    fn attach(&mut self, surface: SurfaceId);

    /// Remove `surface`; unknown ids are ignored
    fn detach(&mut self, surface: SurfaceId);

    /// Surfaces currently attached
    fn attached(&self) -> &[SurfaceId];
}
