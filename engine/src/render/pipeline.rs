//! Render Pipeline
//!
//! wgpu bring-up and the flat 2D pipeline the demo draws with. One
//! triangle-list pass, no depth buffer, alpha blending: the index stream
//! order is the occlusion order, which is exactly what the painter-sorted
//! primitive batch relies on.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use winit::window::Window;

use crate::render::primitives::{PrimitiveBatch, Vertex2d};
use crate::theme::Color;

/// Capacity of the per-frame vertex buffer.
pub const VERTEX_BUFFER_SIZE: u64 = 1024 * 1024;
/// Capacity of the per-frame index buffer.
pub const INDEX_BUFFER_SIZE: u64 = 256 * 1024;

/// Render configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Present-mode vsync. The main loop paces itself in software, so the
    /// default leaves this off.
    pub vsync: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            vsync: false,
        }
    }
}

/// Viewport size uniform; the vertex shader maps pixel coordinates to NDC.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct ScreenUniforms {
    size: [f32; 2],
    pad: [f32; 2],
}

/// Owns the surface, device and the one pipeline the demo needs, plus the
/// dynamic buffers a frame's batch is uploaded into.
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
}

impl RenderState {
    /// Set up wgpu on `window` and build the flat 2D pipeline.
    ///
    /// Blocks on adapter/device acquisition; GPU bring-up failures are
    /// fatal at startup.
    pub fn new(window: Arc<Window>, config: &RenderConfig) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window).unwrap();

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("Failed to find suitable adapter");

        let adapter_info = adapter.get_info();
        let name_lower = adapter_info.name.to_lowercase();
        let is_software_renderer = name_lower.contains("llvmpipe")
            || name_lower.contains("lavapipe")
            || name_lower.contains("swiftshader")
            || adapter_info.device_type == wgpu::DeviceType::Cpu;

        tracing::info!(
            "using adapter: {} ({:?}){}",
            adapter_info.name,
            adapter_info.backend,
            if is_software_renderer {
                " [software renderer]"
            } else {
                ""
            }
        );

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Iso Grid Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            ..Default::default()
        }))
        .expect("Failed to create device");

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let present_mode = pick_present_mode(config.vsync, is_software_renderer, &surface_caps);
        tracing::info!("surface format {surface_format:?}, present mode {present_mode:?}");

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: config.width,
            height: config.height,
            present_mode,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Flat 2D Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../../../shaders/flat2d.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Screen Uniform Buffer"),
            size: std::mem::size_of::<ScreenUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Screen Bind Group Layout"),
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
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Screen Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat 2D Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Flat 2D Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex2d>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 8,
                            shader_location: 1,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None, // Draw order is the depth order
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Vertex Buffer"),
            size: VERTEX_BUFFER_SIZE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Index Buffer"),
            size: INDEX_BUFFER_SIZE,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            surface,
            device,
            queue,
            config: surface_config,
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            index_buffer,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload `batch` and draw it over a `clear`-colored frame, then
    /// present. The batch's index order is replayed verbatim.
    pub fn render(
        &mut self,
        batch: &PrimitiveBatch,
        clear: Color,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = ScreenUniforms {
            size: [self.config.width as f32, self.config.height as f32],
            pad: [0.0; 2],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let vertex_bytes: &[u8] = bytemuck::cast_slice(&batch.vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(&batch.indices);
        let mut index_count = batch.indices.len() as u32;
        if vertex_bytes.len() as u64 > VERTEX_BUFFER_SIZE
            || index_bytes.len() as u64 > INDEX_BUFFER_SIZE
        {
            tracing::warn!(
                "frame batch exceeds buffer capacity ({} vertices, {} indices), dropping frame",
                batch.vertices.len(),
                batch.indices.len()
            );
            index_count = 0;
        } else if index_count > 0 {
            self.queue.write_buffer(&self.vertex_buffer, 0, vertex_bytes);
            self.queue.write_buffer(&self.index_buffer, 0, index_bytes);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear[0] as f64,
                            g: clear[1] as f64,
                            b: clear[2] as f64,
                            a: clear[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if index_count > 0 {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Present-mode choice: honor vsync when asked, otherwise prefer an
/// uncapped mode the adapter actually supports. Software renderers rarely
/// offer Immediate, so they get Mailbox where available.
fn pick_present_mode(
    vsync: bool,
    is_software_renderer: bool,
    caps: &wgpu::SurfaceCapabilities,
) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::AutoVsync;
    }
    if is_software_renderer {
        if caps.present_modes.contains(&wgpu::PresentMode::Mailbox) {
            return wgpu::PresentMode::Mailbox;
        }
        return wgpu::PresentMode::Fifo;
    }
    if caps.present_modes.contains(&wgpu::PresentMode::Immediate) {
        wgpu::PresentMode::Immediate
    } else if caps.present_modes.contains(&wgpu::PresentMode::Mailbox) {
        wgpu::PresentMode::Mailbox
    } else {
        wgpu::PresentMode::Fifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_config() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert!(!config.vsync);
    }

    #[test]
    fn test_screen_uniforms_layout() {
        // Two vec2s, 16 bytes, matching the WGSL uniform block
        assert_eq!(std::mem::size_of::<ScreenUniforms>(), 16);
        let uniforms = ScreenUniforms {
            size: [1920.0, 1080.0],
            pad: [0.0; 2],
        };
        assert_eq!(bytemuck::bytes_of(&uniforms).len(), 16);
    }
}
