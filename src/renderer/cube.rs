//! Cube renderer
//!
//! Draws the triangle list produced by [`build_mesh`] with one uniform
//! (camera and light) and a depth test. The mesh is rebuilt every frame;
//! it is a few thousand vertices, so a single growable vertex buffer is
//! rewritten in place.

use wgpu::util::DeviceExt;

use crate::camera::core::CameraUniform;
use crate::gpu::dynamic_buffer::TypedBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{depth_stencil_state, DepthTarget};
use crate::options::DisplayOptions;
use crate::scene::mesh::{build_mesh, CubeVertex};
use crate::scene::SceneFrame;

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<CubeVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

/// Pipeline, buffers and depth target for drawing one cube.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform: CameraUniform,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertices: TypedBuffer<CubeVertex>,
    depth: DepthTarget,
}

impl CubeRenderer {
    /// Create the pipeline for the context's surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let uniform = CameraUniform::new();
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Cube Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("Cube Camera Bind Group"),
        });

        let pipeline = Self::create_pipeline(context, &layout);
        let vertices = TypedBuffer::with_capacity(
            device,
            "Cube Vertex Buffer",
            4096,
            wgpu::BufferUsages::VERTEX,
        );
        let (width, height) = context.size();

        Self {
            pipeline,
            uniform,
            uniform_buffer,
            bind_group,
            vertices,
            depth: DepthTarget::new(device, width, height),
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let device = &context.device;
        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Cube Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("shaders/cube.wgsl").into(),
                ),
            });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Cube Pipeline Layout"),
                bind_group_layouts: &[camera_layout],
                push_constant_ranges: &[],
            });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Quads are emitted without a consistent winding.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Recreate the depth target for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = DepthTarget::new(device, width, height);
    }

    /// Upload the camera uniform and the frame's mesh.
    pub fn prepare(
        &mut self,
        context: &RenderContext,
        frame: &SceneFrame,
        display: &DisplayOptions,
    ) {
        self.uniform
            .update(frame.view_proj, frame.eye, frame.light_dir, frame.ambient);
        context.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
        let mesh = build_mesh(frame, display);
        let _ = self.vertices.write(&context.device, &context.queue, &mesh);
    }

    /// Record the cube pass into `encoder`, clearing to `background`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        background: [f32; 3],
    ) {
        let [r, g, b] = background.map(f64::from);
        let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cube render pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a: 1.0 }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        if self.vertices.is_empty() {
            return;
        }
        rp.set_pipeline(&self.pipeline);
        rp.set_bind_group(0, &self.bind_group, &[]);
        rp.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        rp.draw(0..self.vertices.count() as u32, 0..1);
    }
}
