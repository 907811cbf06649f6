use std::f32::consts::FRAC_PI_2;

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::config::ViewerConfig;
use crate::core::ViewportSize;
use crate::description::{SceneDescription, SceneMetadata, SceneObject};
use crate::math::Rgb;

use super::animation::AnimationKind;
use super::camera::{PerspectiveCamera, DEFAULT_CAMERA_POSITION, DEFAULT_CAMERA_TARGET};
use super::geometry::GeometryKind;
use super::light::{
    AmbientLight, DirectionalLight, DEFAULT_AMBIENT_INTENSITY, DEFAULT_SUN_INTENSITY,
    DEFAULT_SUN_POSITION,
};
use super::palette::{Material, MaterialPalette, GROUND_MATERIAL};

pub const GROUND_NAME: &str = "Ground";
pub const GROUND_SIZE: f32 = 30.0;
pub const GROUND_OFFSET: f32 = -0.5;

/// One drawable: geometry, material and transform
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    pub name: String,
    pub geometry: GeometryKind,
    pub material: Material,
    pub position: Vec3,
    /// Euler angles (XYZ order) in radians
    pub rotation: Vec3,
    pub scale: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub animation: AnimationKind,
    /// Linear light, uploaded as is
    pub emissive: Rgb,
}

impl MeshNode {
    fn from_object(object: &SceneObject, palette: &MaterialPalette) -> Self {
        Self {
            name: object.name().to_string(),
            geometry: GeometryKind::from_type_name(object.kind.as_deref()),
            material: palette.resolve(object.material.as_deref(), object.color),
            position: object.position.map(Vec3::from_array).unwrap_or(Vec3::ZERO),
            rotation: Vec3::ZERO,
            scale: object.scale.map(Vec3::from_array).unwrap_or(Vec3::ONE),
            cast_shadow: true,
            receive_shadow: true,
            animation: AnimationKind::for_object(object),
            emissive: Rgb::BLACK,
        }
    }

    fn ground(palette: &MaterialPalette) -> Self {
        Self {
            name: GROUND_NAME.to_string(),
            geometry: GeometryKind::Plane,
            material: palette.resolve(Some(GROUND_MATERIAL), Some(Rgb::from_hex(0x90ee90))),
            position: Vec3::new(0.0, GROUND_OFFSET, 0.0),
            rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
            scale: Vec3::new(GROUND_SIZE, GROUND_SIZE, 1.0),
            cast_shadow: false,
            receive_shadow: true,
            animation: AnimationKind::None,
            emissive: Rgb::BLACK,
        }
    }

    pub fn local_transform(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub camera: PerspectiveCamera,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    /// Description objects in order, then the ground plane
    pub meshes: Vec<MeshNode>,
    /// Rotation of the whole scene about +Y
    pub rotation: f32,
    pub metadata: Option<SceneMetadata>,
}

impl Scene {
    /// Build a scene from a description. Infallible: anything missing or
    /// malformed falls back to a default.
    pub fn build(
        description: &SceneDescription,
        size: ViewportSize,
        palette: &MaterialPalette,
        config: &ViewerConfig,
    ) -> Self {
        let mut camera = PerspectiveCamera::new(config.fov_degrees, size.aspect(), config.near, config.far);
        let camera_desc = description.camera.as_ref();
        camera.position = camera_desc
            .and_then(|c| c.position)
            .map(Vec3::from_array)
            .unwrap_or(DEFAULT_CAMERA_POSITION);
        camera.look_at(
            camera_desc
                .and_then(|c| c.target)
                .map(Vec3::from_array)
                .unwrap_or(DEFAULT_CAMERA_TARGET),
        );

        let lighting = description.lighting.as_ref();
        let sun_desc = lighting.and_then(|l| l.sun.as_ref());
        let sun = DirectionalLight::new(
            sun_desc
                .and_then(|s| s.position)
                .map(Vec3::from_array)
                .unwrap_or(DEFAULT_SUN_POSITION),
            sun_desc
                .and_then(|s| s.intensity)
                .unwrap_or(DEFAULT_SUN_INTENSITY)
                .max(0.0),
            config.shadow_map_size,
        );
        let ambient = AmbientLight {
            intensity: lighting
                .and_then(|l| l.ambient.as_ref())
                .and_then(|a| a.intensity)
                .unwrap_or(DEFAULT_AMBIENT_INTENSITY)
                .max(0.0),
            ..AmbientLight::default()
        };

        let mut meshes: Vec<MeshNode> = description
            .objects
            .iter()
            .map(|object| MeshNode::from_object(object, palette))
            .collect();
        meshes.push(MeshNode::ground(palette));

        log::debug!(
            "Built scene: {} objects, camera at {:?}, sun at {:?}",
            description.objects.len(),
            camera.position,
            sun.position
        );

        Self {
            background: config.background,
            camera,
            ambient,
            sun,
            meshes,
            rotation: 0.0,
            metadata: description.metadata.clone(),
        }
    }

    pub fn root_transform(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation)
    }

    pub fn world_transform(&self, node: &MeshNode) -> Mat4 {
        self.root_transform() * node.local_transform()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn find(&self, name: &str) -> Option<&MeshNode> {
        self.meshes.iter().find(|m| m.name == name)
    }

    pub fn ground(&self) -> Option<&MeshNode> {
        self.meshes.last().filter(|m| m.name == GROUND_NAME)
    }

    pub fn set_viewport(&mut self, size: ViewportSize) {
        self.camera.set_aspect(size.width, size.height);
    }
}
