use glam::Mat4;

use crate::scene::{MeshNode, Scene};

pub const FLAG_RECEIVE_SHADOW: u32 = 1;
pub const FLAG_FLAT_SHADING: u32 = 1 << 1;

/// Mesh vertex
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-frame camera and lighting data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub ambient_intensity: f32,
    pub ambient_color: [f32; 3],
    pub shadow_texel: f32,
    pub sun_direction: [f32; 3], // towards the sun
    pub sun_intensity: f32,
    pub sun_color: [f32; 3],
    pub shadow_bias: f32,
}

impl SceneUniform {
    pub fn from_scene(scene: &Scene) -> Self {
        let sun = &scene.sun;
        Self {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            light_view_proj: sun.view_projection().to_cols_array_2d(),
            camera_position: scene.camera.position.to_array(),
            ambient_intensity: scene.ambient.intensity,
            ambient_color: scene.ambient.color.to_linear(),
            shadow_texel: sun.shadow.texel_size(),
            sun_direction: sun.direction_to_light().to_array(),
            sun_intensity: sun.intensity,
            sun_color: sun.color.to_linear(),
            // Negative bias tells the shader to skip the shadow lookup
            shadow_bias: if sun.cast_shadow { sun.shadow.bias } else { -1.0 },
        }
    }
}

/// Per-mesh data, stored in a storage buffer indexed by instance
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceUniform {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub color: [f32; 4], // linear rgb + opacity
    pub emissive: [f32; 3],
    pub flags: u32,
}

impl InstanceUniform {
    pub fn new(node: &MeshNode, root: Mat4) -> Self {
        let model = root * node.local_transform();
        // Zero scale has no inverse; such a mesh covers no pixels anyway
        let normal = if model.determinant().abs() > f32::EPSILON {
            model.inverse().transpose()
        } else {
            Mat4::IDENTITY
        };

        let [r, g, b] = node.material.color.to_linear();
        let mut flags = 0;
        if node.receive_shadow {
            flags |= FLAG_RECEIVE_SHADOW;
        }
        if node.material.flat_shading {
            flags |= FLAG_FLAT_SHADING;
        }

        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            color: [r, g, b, node.material.opacity],
            emissive: node.emissive.to_array(),
            flags,
        }
    }

    pub fn for_scene(scene: &Scene) -> Vec<InstanceUniform> {
        let root = scene.root_transform();
        scene.meshes.iter().map(|node| Self::new(node, root)).collect()
    }
}
