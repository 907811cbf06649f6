use std::collections::HashMap;

use wgpu::util::DeviceExt;
use wgpu::{Buffer, Device};

use crate::scene::GeometryKind;

/// Vertex and index buffers of one primitive
pub struct GpuMesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

/// One GPU mesh per geometry kind, shared by every node using it
pub struct MeshBuffers {
    meshes: HashMap<GeometryKind, GpuMesh>,
}

impl MeshBuffers {
    pub fn new(device: &Device) -> Self {
        let meshes = GeometryKind::ALL
            .into_iter()
            .map(|kind| {
                let data = kind.mesh();
                let label = format!("{:?}", kind);
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} Vertex Buffer", label)),
                    contents: bytemuck::cast_slice(&data.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} Index Buffer", label)),
                    contents: bytemuck::cast_slice(&data.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let mesh = GpuMesh {
                    vertex_buffer,
                    index_buffer,
                    index_count: data.indices.len() as u32,
                };
                (kind, mesh)
            })
            .collect();

        Self { meshes }
    }

    pub fn get(&self, kind: GeometryKind) -> Option<&GpuMesh> {
        self.meshes.get(&kind)
    }

    pub fn destroy(&self) {
        for mesh in self.meshes.values() {
            mesh.vertex_buffer.destroy();
            mesh.index_buffer.destroy();
        }
    }
}
