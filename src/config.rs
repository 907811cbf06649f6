use crate::math::Rgb;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
pub const DEFAULT_BACKGROUND: Rgb = Rgb::from_hex(0x87ceeb);
pub const DEFAULT_ROTATION_STEP: f32 = 0.003;
pub const DEFAULT_SHADOW_MAP_SIZE: u32 = 2048;
pub const DEFAULT_FOV_DEGREES: f32 = 75.0;

/// Viewer settings. Everything here is fixed for the lifetime of a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// Scene rotation about +Y per rendered frame, in radians
    pub rotation_step: f32,
    pub shadow_map_size: u32,
    pub antialias: bool,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl ViewerConfig {
    /// MSAA sample count for the main pass
    pub fn sample_count(&self) -> u32 {
        if self.antialias {
            4
        } else {
            1
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            background: DEFAULT_BACKGROUND,
            rotation_step: DEFAULT_ROTATION_STEP,
            shadow_map_size: DEFAULT_SHADOW_MAP_SIZE,
            antialias: true,
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: 0.1,
            far: 1000.0,
        }
    }
}
