use glam::Vec3;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, RenderPipeline, Sampler, Surface,
    SurfaceConfiguration, Texture, TextureFormat, TextureView,
};

use crate::error::{Result, ViewerError};
use crate::math::Rgb;
use crate::scene::Scene;
use crate::types::{InstanceUniform, SceneUniform, Vertex};

use super::backend::RenderTarget;
use super::gpu_context::GpuContext;
use super::mesh_buffers::MeshBuffers;
use super::mount::{SurfaceId, ViewportSize};

const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;
const SHADOW_FORMAT: TextureFormat = TextureFormat::Depth32Float;

/// Draws a scene into a window surface
///
/// Each frame runs a depth-only pass from the sun into the shadow map, then
/// the main pass: opaque meshes first, transparent meshes back to front.
/// Dropping the renderer destroys every GPU resource it created.
pub struct SurfaceRenderer {
    id: SurfaceId,
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    sample_count: u32,

    opaque_pipeline: RenderPipeline,
    transparent_pipeline: RenderPipeline,
    shadow_pipeline: RenderPipeline,

    scene_layout: BindGroupLayout,
    scene_buffer: Buffer,
    instance_buffer: Buffer,
    instance_capacity: usize,
    scene_bind_group: BindGroup,

    shadow_layout: BindGroupLayout,
    shadow_sampler: Sampler,
    shadow_map: Texture,
    shadow_view: TextureView,
    shadow_bind_group: BindGroup,
    shadow_map_size: u32,

    depth_texture: Texture,
    depth_view: TextureView,
    msaa: Option<(Texture, TextureView)>,

    meshes: MeshBuffers,
}

impl SurfaceRenderer {
    pub fn new(
        id: SurfaceId,
        gpu: GpuContext,
        surface: Surface<'static>,
        size: ViewportSize,
        sample_count: u32,
        shadow_map_size: u32,
    ) -> Result<Self> {
        let device = gpu.device();

        let surface_caps = surface.get_capabilities(gpu.adapter());
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(ViewerError::UnsupportedSurface)?;

        let surface_config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(device, &surface_config);

        let sample_count = Self::supported_sample_count(&gpu, surface_format, sample_count);

        let scene_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let shadow_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Shadow Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../scene.wgsl").into()),
        });

        let (opaque_pipeline, transparent_pipeline) = Self::create_main_pipelines(
            device,
            &shader,
            &scene_layout,
            &shadow_layout,
            surface_format,
            sample_count,
        );
        let shadow_pipeline = Self::create_shadow_pipeline(device, &shader, &scene_layout);

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Uniform Buffer"),
            size: std::mem::size_of::<SceneUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let instance_capacity = 16;
        let instance_buffer = Self::create_instance_buffer(device, instance_capacity);
        let scene_bind_group =
            Self::create_scene_bind_group(device, &scene_layout, &scene_buffer, &instance_buffer);

        let shadow_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });
        let (shadow_map, shadow_view) = Self::create_shadow_map(device, shadow_map_size);
        let shadow_bind_group =
            Self::create_shadow_bind_group(device, &shadow_layout, &shadow_view, &shadow_sampler);

        let (depth_texture, depth_view) =
            Self::create_depth_texture(device, &surface_config, sample_count);
        let msaa = Self::create_msaa_texture(device, &surface_config, sample_count);

        let meshes = MeshBuffers::new(device);

        log::debug!(
            "Created {} ({}x{}, {:?}, {}x MSAA)",
            id,
            surface_config.width,
            surface_config.height,
            surface_format,
            sample_count
        );

        Ok(Self {
            id,
            gpu,
            surface,
            surface_config,
            sample_count,
            opaque_pipeline,
            transparent_pipeline,
            shadow_pipeline,
            scene_layout,
            scene_buffer,
            instance_buffer,
            instance_capacity,
            scene_bind_group,
            shadow_layout,
            shadow_sampler,
            shadow_map,
            shadow_view,
            shadow_bind_group,
            shadow_map_size,
            depth_texture,
            depth_view,
            msaa,
            meshes,
        })
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Get current surface dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    fn supported_sample_count(gpu: &GpuContext, format: TextureFormat, requested: u32) -> u32 {
        if requested <= 1 {
            return 1;
        }
        let flags = gpu.adapter().get_texture_format_features(format).flags;
        if flags.sample_count_supported(requested) {
            requested
        } else {
            log::warn!("{}x MSAA unsupported for {:?}, rendering without it", requested, format);
            1
        }
    }

    fn create_main_pipelines(
        device: &Device,
        shader: &wgpu::ShaderModule,
        scene_layout: &BindGroupLayout,
        shadow_layout: &BindGroupLayout,
        format: TextureFormat,
        sample_count: u32,
    ) -> (RenderPipeline, RenderPipeline) {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[scene_layout, shadow_layout],
            push_constant_ranges: &[],
        });

        let create = |label: &str, blend: wgpu::BlendState, depth_write: bool| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(blend),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: depth_write,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: sample_count,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let opaque = create("Opaque Pipeline", wgpu::BlendState::REPLACE, true);
        let transparent = create("Transparent Pipeline", wgpu::BlendState::ALPHA_BLENDING, false);
        (opaque, transparent)
    }

    fn create_shadow_pipeline(
        device: &Device,
        shader: &wgpu::ShaderModule,
        scene_layout: &BindGroupLayout,
    ) -> RenderPipeline {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow Pipeline Layout"),
            bind_group_layouts: &[scene_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_shadow"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: None,
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: SHADOW_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 2.0,
                    clamp: 0.0,
                },
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (capacity.max(1) * std::mem::size_of::<InstanceUniform>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_scene_bind_group(
        device: &Device,
        layout: &BindGroupLayout,
        scene_buffer: &Buffer,
        instance_buffer: &Buffer,
    ) -> BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: instance_buffer.as_entire_binding(),
                },
            ],
        })
    }

    fn create_shadow_map(device: &Device, size: u32) -> (Texture, TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shadow Map"),
            size: wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SHADOW_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    fn create_shadow_bind_group(
        device: &Device,
        layout: &BindGroupLayout,
        view: &TextureView,
        sampler: &Sampler,
    ) -> BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shadow Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    fn create_depth_texture(
        device: &Device,
        config: &SurfaceConfiguration,
        sample_count: u32,
    ) -> (Texture, TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    fn create_msaa_texture(
        device: &Device,
        config: &SurfaceConfiguration,
        sample_count: u32,
    ) -> Option<(Texture, TextureView)> {
        if sample_count <= 1 {
            return None;
        }
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("MSAA Color Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: config.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Some((texture, view))
    }

    fn ensure_instance_capacity(&mut self, count: usize) {
        if count <= self.instance_capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        let device = self.gpu.device();
        self.instance_buffer.destroy();
        self.instance_buffer = Self::create_instance_buffer(device, capacity);
        self.scene_bind_group = Self::create_scene_bind_group(
            device,
            &self.scene_layout,
            &self.scene_buffer,
            &self.instance_buffer,
        );
        self.instance_capacity = capacity;
        log::debug!("Instance buffer grown to {} entries", capacity);
    }

    fn ensure_shadow_map(&mut self, size: u32) {
        if size == self.shadow_map_size {
            return;
        }
        let device = self.gpu.device();
        self.shadow_map.destroy();
        let (shadow_map, shadow_view) = Self::create_shadow_map(device, size);
        self.shadow_bind_group = Self::create_shadow_bind_group(
            device,
            &self.shadow_layout,
            &shadow_view,
            &self.shadow_sampler,
        );
        self.shadow_map = shadow_map;
        self.shadow_view = shadow_view;
        self.shadow_map_size = size;
    }

    fn reconfigure(&mut self) {
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    fn draw_nodes(&self, pass: &mut wgpu::RenderPass<'_>, scene: &Scene, indices: &[u32]) {
        for &index in indices {
            let Some(node) = scene.meshes.get(index as usize) else {
                continue;
            };
            let Some(mesh) = self.meshes.get(node.geometry) else {
                continue;
            };
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..mesh.index_count, 0, index..index + 1);
        }
    }
}

impl RenderTarget for SurfaceRenderer {
    fn surface_id(&self) -> SurfaceId {
        self.id
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        self.ensure_shadow_map(scene.sun.shadow.map_size);

        let instances = InstanceUniform::for_scene(scene);
        self.ensure_instance_capacity(instances.len());

        let queue = self.gpu.queue();
        queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::bytes_of(&SceneUniform::from_scene(scene)),
        );
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("{} out of date, reconfiguring", self.id);
                self.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("{} timed out, skipping frame", self.id);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let surface_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let order = DrawOrder::for_scene(scene);

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if scene.sun.cast_shadow {
                pass.set_pipeline(&self.shadow_pipeline);
                pass.set_bind_group(0, &self.scene_bind_group, &[]);
                self.draw_nodes(&mut pass, scene, &order.shadow_casters);
            }
        }

        {
            let (view, resolve_target, store) = match &self.msaa {
                Some((_, msaa_view)) => (msaa_view, Some(&surface_view), wgpu::StoreOp::Discard),
                None => (&surface_view, None, wgpu::StoreOp::Store),
            };

            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(scene.background)),
                        store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.scene_bind_group, &[]);
            pass.set_bind_group(1, &self.shadow_bind_group, &[]);

            pass.set_pipeline(&self.opaque_pipeline);
            self.draw_nodes(&mut pass, scene, &order.opaque);

            pass.set_pipeline(&self.transparent_pipeline);
            self.draw_nodes(&mut pass, scene, &order.transparent);
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }

    fn resize(&mut self, size: ViewportSize) {
        if size.is_empty() {
            return;
        }
        if size.width == self.surface_config.width && size.height == self.surface_config.height {
            return;
        }

        self.surface_config.width = size.width;
        self.surface_config.height = size.height;
        self.reconfigure();

        let device = self.gpu.device();
        self.depth_texture.destroy();
        let (depth_texture, depth_view) =
            Self::create_depth_texture(device, &self.surface_config, self.sample_count);
        if let Some((texture, _)) = &self.msaa {
            texture.destroy();
        }
        let msaa = Self::create_msaa_texture(device, &self.surface_config, self.sample_count);

        self.depth_texture = depth_texture;
        self.depth_view = depth_view;
        self.msaa = msaa;
    }
}

impl Drop for SurfaceRenderer {
    fn drop(&mut self) {
        self.meshes.destroy();
        self.scene_buffer.destroy();
        self.instance_buffer.destroy();
        self.shadow_map.destroy();
        self.depth_texture.destroy();
        if let Some((texture, _)) = &self.msaa {
            texture.destroy();
        }
        log::debug!("Disposed {}", self.id);
    }
}

fn clear_color(color: Rgb) -> wgpu::Color {
    let [r, g, b] = color.to_linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}

/// Mesh indices grouped per pass
#[derive(Debug, Default, PartialEq)]
struct DrawOrder {
    shadow_casters: Vec<u32>,
    opaque: Vec<u32>,
    /// Farthest from the camera first
    transparent: Vec<u32>,
}

impl DrawOrder {
    fn for_scene(scene: &Scene) -> Self {
        let mut order = DrawOrder::default();
        let mut transparent = Vec::new();

        for (index, node) in scene.meshes.iter().enumerate() {
            let index = index as u32;
            if node.cast_shadow {
                order.shadow_casters.push(index);
            }
            if node.material.is_transparent() {
                let world = scene.world_transform(node).transform_point3(Vec3::ZERO);
                transparent.push((index, world.distance_squared(scene.camera.position)));
            } else {
                order.opaque.push(index);
            }
        }

        transparent.sort_by(|a, b| b.1.total_cmp(&a.1));
        order.transparent = transparent.into_iter().map(|(index, _)| index).collect();
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::description::SceneDescription;
    use crate::scene::MaterialPalette;

    fn build(json: &str) -> Scene {
        let description = SceneDescription::from_json_str(json).unwrap();
        Scene::build(
            &description,
            ViewportSize::new(800, 600),
            &MaterialPalette::standard(),
            &ViewerConfig::default(),
        )
    }

    #[test]
    fn test_clear_color_is_linear() {
        let color = clear_color(Rgb::from_hex(0x87ceeb));
        assert!(color.r < 0.3);
        assert!(color.b > 0.8);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_transparent_meshes_drawn_last() {
        let scene = build(
            r#"{"objects": [
                {"name": "Wall", "material": "wall"},
                {"name": "Window", "material": "window", "position": [0, 1, 0]}
            ]}"#,
        );
        let order = DrawOrder::for_scene(&scene);

        // Wall and ground are opaque
        assert_eq!(order.opaque, vec![0, 2]);
        assert_eq!(order.transparent, vec![1]);
    }

    #[test]
    fn test_transparent_sorted_back_to_front() {
        let scene = build(
            r#"{
                "camera": {"position": [0, 0, 20], "target": [0, 0, 0]},
                "objects": [
                    {"name": "Near", "material": "window", "position": [0, 0, 10]},
                    {"name": "Far", "material": "window", "position": [0, 0, -10]}
                ]
            }"#,
        );
        let order = DrawOrder::for_scene(&scene);

        assert_eq!(order.transparent, vec![1, 0]);
    }

    #[test]
    fn test_ground_casts_no_shadow() {
        let scene = build(r#"{"objects": [{"name": "Wall"}]}"#);
        let order = DrawOrder::for_scene(&scene);

        assert_eq!(order.shadow_casters, vec![0]);
    }
}
