use crate::constants::*;
use crate::core::geometry;
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;

/// GPU state shared between the frame loop and the asset-completion tasks.
/// `None` when WebGPU init failed; the page then degrades to DOM-only.
pub type SharedGpu = std::rc::Rc<std::cell::RefCell<Option<GpuState<'static>>>>;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct EntityUniforms {
    model: [[f32; 4]; 4],
    // x: opacity, y: lit flag
    params: [f32; 4],
}

struct Entity {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    params: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    entity_bgl: wgpu::BindGroupLayout,
    env_bgl: wgpu::BindGroupLayout,
    env_bind_group: wgpu::BindGroup,

    albedo_sampler: wgpu::Sampler,
    env_sampler: wgpu::Sampler,

    sphere_pipeline: wgpu::RenderPipeline,
    backdrop_pipeline: wgpu::RenderPipeline,

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    // entity 0 is the backdrop, 1..=4 the orbiting spheres
    entities: Vec<Entity>,

    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits so older WebGPU impls accept the request
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        // Shared unit sphere mesh, scaled per entity by the model matrix
        let mesh = geometry::unit_sphere(SPHERE_SEGMENTS);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = mesh.indices.len() as u32;

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let entity_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("entity_bgl"),
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
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let env_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("env_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let albedo_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("albedo_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let env_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("env_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Placeholder textures until the real assets arrive: near-black
        // albedo, black environment. Spheres render dark, as the original
        // does before its loads resolve.
        let placeholder_albedo = helpers::upload_texture(
            &device,
            &queue,
            "albedo_placeholder",
            1,
            1,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            4,
            &[20, 20, 20, 255],
        );
        let env_view = helpers::upload_texture(
            &device,
            &queue,
            "env_placeholder",
            1,
            1,
            wgpu::TextureFormat::Rgba16Float,
            8,
            &[0u8; 8],
        );
        let env_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("env_bg"),
            layout: &env_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&env_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&env_sampler),
                },
            ],
        });

        let mut entities = Vec::with_capacity(1 + SPHERE_COUNT);
        for i in 0..=SPHERE_COUNT {
            let params = if i == 0 {
                [BACKDROP_OPACITY, 0.0, 0.0, 0.0]
            } else {
                [1.0, 1.0, 0.0, 0.0]
            };
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("entity_uniforms"),
                size: std::mem::size_of::<EntityUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = create_entity_bind_group(
                &device,
                &entity_bgl,
                &uniform_buffer,
                &placeholder_albedo,
                &albedo_sampler,
            );
            entities.push(Entity {
                uniform_buffer,
                bind_group,
                params,
            });
        }

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &entity_bgl, &env_bgl],
            push_constant_ranges: &[],
        });
        let sphere_pipeline = make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            wgpu::Face::Back,
            None,
            true,
        );
        // Backdrop: camera sits inside, so cull front faces, blend at a
        // fixed opacity, and leave the depth buffer untouched.
        let backdrop_pipeline = make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            wgpu::Face::Front,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bind_group,
            entity_bgl,
            env_bgl,
            env_bind_group,
            albedo_sampler,
            env_sampler,
            sphere_pipeline,
            backdrop_pipeline,
            vertex_buffer,
            index_buffer,
            index_count,
            entities,
            depth_view,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Swap in a decoded sRGB texture for orbiting sphere `i` (0..4).
    pub fn set_sphere_albedo(&mut self, i: usize, width: u32, height: u32, rgba: &[u8]) {
        self.set_albedo(1 + i, "sphere_albedo", width, height, rgba);
    }

    /// Swap in the starfield texture on the backdrop sphere.
    pub fn set_backdrop_albedo(&mut self, width: u32, height: u32, rgba: &[u8]) {
        self.set_albedo(0, "backdrop_albedo", width, height, rgba);
    }

    fn set_albedo(&mut self, entity: usize, label: &str, width: u32, height: u32, rgba: &[u8]) {
        if entity >= self.entities.len() {
            return;
        }
        let view = helpers::upload_texture(
            &self.device,
            &self.queue,
            label,
            width,
            height,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            4,
            rgba,
        );
        self.entities[entity].bind_group = create_entity_bind_group(
            &self.device,
            &self.entity_bgl,
            &self.entities[entity].uniform_buffer,
            &view,
            &self.albedo_sampler,
        );
    }

    /// Install the decoded equirectangular HDRI (`rgba16float` texels).
    pub fn set_environment(&mut self, width: u32, height: u32, rgba16f: &[u8]) {
        let view = helpers::upload_texture(
            &self.device,
            &self.queue,
            "environment",
            width,
            height,
            wgpu::TextureFormat::Rgba16Float,
            8,
            rgba16f,
        );
        self.env_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("env_bg"),
            layout: &self.env_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.env_sampler),
                },
            ],
        });
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (_tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = view;
        }
    }

    /// Draw one frame: backdrop first (depth-read only), then the four
    /// orbiting spheres. `models[0]` is the backdrop transform, `models[1..]`
    /// the sphere transforms.
    pub fn render(&mut self, models: &[Mat4]) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let eye = Vec3::new(0.0, 0.0, CAMERA_Z);
        let proj = Mat4::perspective_rh(
            CAMERA_FOV_DEG.to_radians(),
            aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let globals = Globals {
            view_proj: (proj * view).to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        for (entity, model) in self.entities.iter().zip(models) {
            let u = EntityUniforms {
                model: model.to_cols_array_2d(),
                params: entity.params,
            };
            self.queue
                .write_buffer(&entity.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_bind_group(2, &self.env_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            rpass.set_pipeline(&self.backdrop_pipeline);
            rpass.set_bind_group(1, &self.entities[0].bind_group, &[]);
            rpass.draw_indexed(0..self.index_count, 0, 0..1);

            rpass.set_pipeline(&self.sphere_pipeline);
            for entity in &self.entities[1..] {
                rpass.set_bind_group(1, &entity.bind_group, &[]);
                rpass.draw_indexed(0..self.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_entity_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    albedo: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("entity_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(albedo),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    cull: wgpu::Face,
    blend: Option<wgpu::BlendState>,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<geometry::Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(cull),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
