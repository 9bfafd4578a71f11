// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::batch::FrameBatch;
use super::vertex::Vertex;

const INITIAL_VERTEX_CAPACITY: usize = 16 * 1024;
const INITIAL_INDEX_CAPACITY: usize = 48 * 1024;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CanvasUniform {
    width: f32,
    height: f32,
    _padding1: f32,
    _padding2: f32,
}

fn create_buffer(device: &wgpu::Device, label: &str, size: u64, usage: wgpu::BufferUsages) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,

    canvas_uniform_buffer: wgpu::Buffer,
    canvas_bind_group: wgpu::BindGroup,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Renderer Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let canvas_uniform = CanvasUniform {
            width: canvas_width,
            height: canvas_height,
            _padding1: 0.0,
            _padding2: 0.0,
        };
        let canvas_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Canvas Uniform Buffer"),
            contents: bytemuck::bytes_of(&canvas_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let canvas_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("canvas_bind_group_layout"),
        });

        let canvas_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &canvas_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: canvas_uniform_buffer.as_entire_binding(),
            }],
            label: Some("canvas_bind_group"),
        });

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Renderer Pipeline Layout"),
            bind_group_layouts: &[&canvas_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Renderer Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // fans and quads come in both windings
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let vertex_buffer = create_buffer(
            device,
            "Frame Vertex Buffer",
            (INITIAL_VERTEX_CAPACITY * std::mem::size_of::<Vertex>()) as u64,
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = create_buffer(
            device,
            "Frame Index Buffer",
            (INITIAL_INDEX_CAPACITY * std::mem::size_of::<u32>()) as u64,
            wgpu::BufferUsages::INDEX,
        );

        Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            canvas_uniform_buffer,
            canvas_bind_group,
        }
    }

    /// Regrows a buffer to the next power of two when `needed` bytes don't fit.
    fn ensure_capacity(
        device: &wgpu::Device,
        buffer: &mut wgpu::Buffer,
        needed: u64,
        label: &str,
        usage: wgpu::BufferUsages,
    ) {
        if needed > buffer.size() {
            let size = needed.next_power_of_two();
            log::debug!("growing {} to {} bytes", label, size);
            *buffer = create_buffer(device, label, size, usage);
        }
    }

    pub fn render_batch(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        batch: &FrameBatch,
        canvas_width: f32,
        canvas_height: f32,
        clear_color: wgpu::Color,
    ) {
        let canvas_uniform = CanvasUniform {
            width: canvas_width,
            height: canvas_height,
            _padding1: 0.0,
            _padding2: 0.0,
        };
        queue.write_buffer(&self.canvas_uniform_buffer, 0, bytemuck::bytes_of(&canvas_uniform));

        let vertex_bytes = (batch.vertices.len() * std::mem::size_of::<Vertex>()) as u64;
        let index_bytes = (batch.indices.len() * std::mem::size_of::<u32>()) as u64;

        if !batch.is_empty() {
            Self::ensure_capacity(device, &mut self.vertex_buffer, vertex_bytes, "Frame Vertex Buffer", wgpu::BufferUsages::VERTEX);
            Self::ensure_capacity(device, &mut self.index_buffer, index_bytes, "Frame Index Buffer", wgpu::BufferUsages::INDEX);
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&batch.vertices));
            queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&batch.indices));
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Clear(clear_color), store: wgpu::StoreOp::Store },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if !batch.is_empty() {
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.canvas_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..vertex_bytes));
            render_pass.set_index_buffer(self.index_buffer.slice(..index_bytes), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..batch.indices.len() as u32, 0, 0..1);
        }
    }
}
