use glam::{Mat4, Vec3};

use crate::math::Rgb;

pub const DEFAULT_SUN_POSITION: Vec3 = Vec3::new(10.0, 10.0, 20.0);
pub const DEFAULT_SUN_INTENSITY: f32 = 1.0;
pub const DEFAULT_AMBIENT_INTENSITY: f32 = 0.6;
pub const AMBIENT_COLOR: Rgb = Rgb::from_hex(0x404040);

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: AMBIENT_COLOR,
            intensity: DEFAULT_AMBIENT_INTENSITY,
        }
    }
}

/// Orthographic shadow frustum of a directional light
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowSettings {
    pub map_size: u32,
    /// Half-width of the square frustum around the light target
    pub extent: f32,
    pub near: f32,
    pub far: f32,
    /// Depth bias applied when comparing against the map
    pub bias: f32,
}

impl ShadowSettings {
    pub fn new(map_size: u32) -> Self {
        Self {
            map_size,
            extent: 22.0,
            near: 0.5,
            far: 500.0,
            bias: 0.0015,
        }
    }

    pub fn texel_size(&self) -> f32 {
        1.0 / self.map_size.max(1) as f32
    }
}

/// "Sun": a directional light shining from `position` towards `target`
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    pub cast_shadow: bool,
    pub shadow: ShadowSettings,
}

impl DirectionalLight {
    pub fn new(position: Vec3, intensity: f32, shadow_map_size: u32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            color: Rgb::WHITE,
            intensity,
            cast_shadow: true,
            shadow: ShadowSettings::new(shadow_map_size),
        }
    }

    /// Unit vector pointing from the target towards the light
    pub fn direction_to_light(&self) -> Vec3 {
        let dir = (self.position - self.target).normalize_or_zero();
        if dir == Vec3::ZERO {
            Vec3::Y
        } else {
            dir
        }
    }

    /// World → light clip space, used to render and sample the shadow map
    pub fn view_projection(&self) -> Mat4 {
        let dir = self.direction_to_light();
        let up = if dir.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        // Keep the eye far enough back that the whole frustum sits in front of it
        let eye = self.target + dir * self.position.distance(self.target).max(self.shadow.extent);
        let view = Mat4::look_at_rh(eye, self.target, up);

        let e = self.shadow.extent;
        let projection = Mat4::orthographic_rh(-e, e, -e, e, self.shadow.near, self.shadow.far);
        projection * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_points_to_light() {
        let sun = DirectionalLight::new(Vec3::new(0.0, 10.0, 0.0), 1.0, 2048);
        assert_eq!(sun.direction_to_light(), Vec3::Y);
    }

    #[test]
    fn test_target_inside_shadow_frustum() {
        let sun = DirectionalLight::new(DEFAULT_SUN_POSITION, 1.0, 2048);
        let p = sun.view_projection() * Vec3::ZERO.extend(1.0);
        assert!(p.x.abs() < 1e-4 && p.y.abs() < 1e-4);
        assert!(p.z > 0.0 && p.z < 1.0);
    }

    #[test]
    fn test_ground_corners_inside_shadow_frustum() {
        let sun = DirectionalLight::new(DEFAULT_SUN_POSITION, 1.0, 2048);
        let vp = sun.view_projection();
        for corner in [
            Vec3::new(-15.0, -0.5, -15.0),
            Vec3::new(15.0, -0.5, -15.0),
            Vec3::new(15.0, -0.5, 15.0),
            Vec3::new(-15.0, -0.5, 15.0),
        ] {
            let p = vp * corner.extend(1.0);
            assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0, "{:?}", corner);
            assert!(p.z >= 0.0 && p.z <= 1.0, "{:?}", corner);
        }
    }

    #[test]
    fn test_coincident_light_falls_back_to_up() {
        let sun = DirectionalLight::new(Vec3::ZERO, 1.0, 2048);
        assert_eq!(sun.direction_to_light(), Vec3::Y);
        assert!(sun.view_projection().is_finite());
    }
}
