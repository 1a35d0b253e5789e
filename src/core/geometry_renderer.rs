use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, error, warn};
use wgpu::{Buffer, Device, RenderPipeline, ShaderModule, Surface, SurfaceConfiguration};
use winit::window::Window;

use super::gpu_context::GpuContext;
use crate::geometry::{GeometryBuffer, Topology};
use crate::types::Vertex;

const BUILTIN_SHADER: &str = include_str!("../geometry.wgsl");
const MIN_VERTEX_CAPACITY: usize = 64;

/// wgpu primitive topology used to draw a scene's buffer
pub fn primitive_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::Lines => wgpu::PrimitiveTopology::LineList,
        Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
        Topology::Points => wgpu::PrimitiveTopology::PointList,
    }
}

/// Vertex capacity to allocate so that `required` vertices fit
pub fn grown_capacity(required: usize) -> usize {
    required.next_power_of_two().max(MIN_VERTEX_CAPACITY)
}

/// Largest vertex count whose bytes fit in `max_bytes`, leaving whole primitives
pub fn drawable_vertices(len: usize, max_bytes: u64, topology: Topology) -> usize {
    let max_vertices = (max_bytes / std::mem::size_of::<Vertex>() as u64) as usize;
    if len <= max_vertices {
        return len;
    }
    let per_primitive = topology.vertices_per_primitive();
    max_vertices - max_vertices % per_primitive
}

struct Pipelines {
    lines: RenderPipeline,
    line_strip: RenderPipeline,
    triangles: RenderPipeline,
    points: RenderPipeline,
}

impl Pipelines {
    fn new(device: &Device, shader: &ShaderModule, format: wgpu::TextureFormat) -> Self {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Geometry Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let build = |topology| Self::create_pipeline(device, &layout, shader, format, topology);

        Self {
            lines: build(Topology::Lines),
            line_strip: build(Topology::LineStrip),
            triangles: build(Topology::Triangles),
            points: build(Topology::Points),
        }
    }

    fn get(&self, topology: Topology) -> &RenderPipeline {
        match topology {
            Topology::Lines => &self.lines,
            Topology::LineStrip => &self.line_strip,
            Topology::Triangles => &self.triangles,
            Topology::Points => &self.points,
        }
    }

    fn create_pipeline(
        device: &Device,
        layout: &wgpu::PipelineLayout,
        shader: &ShaderModule,
        format: wgpu::TextureFormat,
        topology: Topology,
    ) -> RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(topology.label()),
            layout: Some(layout),
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
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: primitive_topology(topology),
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

/// Uploads one generated frame and draws it with the scene's topology
pub struct GeometryRenderer {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    pipelines: Pipelines,
    vertex_buffer: Option<Buffer>,
    vertex_capacity: usize,
}

impl GeometryRenderer {
    /// Create the surface, device and pipelines for `window`.
    ///
    /// A custom shader that cannot be read or fails validation is reported
    /// and replaced by the built-in one.
    pub async fn new(window: Arc<Window>, shader_path: Option<&Path>) -> Result<Self> {
        let size = window.inner_size();
        let instance = GpuContext::create_instance();
        let surface = instance
            .create_surface(window)
            .context("Failed to create surface")?;
        let gpu = GpuContext::new_with_surface(&instance, &surface).await?;

        let surface_config =
            Self::create_surface_config(&surface, gpu.adapter(), size.width, size.height)?;
        surface.configure(gpu.device(), &surface_config);

        let pipelines = match shader_path {
            Some(path) => Self::custom_pipelines(&gpu, path, surface_config.format)
                .await
                .unwrap_or_else(|e| {
                    warn!("{:#}; using built-in shader", e);
                    Self::builtin_pipelines(gpu.device(), surface_config.format)
                }),
            None => Self::builtin_pipelines(gpu.device(), surface_config.format),
        };

        Ok(Self {
            gpu,
            surface,
            surface_config,
            pipelines,
            vertex_buffer: None,
            vertex_capacity: 0,
        })
    }

    pub fn gpu(&self) -> &GpuContext {
        &self.gpu
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    /// Reconfigure after the surface reports it is lost or outdated
    pub fn reconfigure(&mut self) {
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    pub fn acquire(&self) -> std::result::Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Record the clear and the geometry draw into `encoder`
    pub fn draw(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        buffer: &GeometryBuffer,
        topology: Topology,
    ) {
        let count = drawable_vertices(buffer.len(), self.gpu.max_buffer_size(), topology);
        if count < buffer.len() {
            warn!(
                "Frame has {} vertices, drawing the first {} that fit in one buffer",
                buffer.len(),
                count
            );
        }
        if count > 0 {
            let vertices = buffer.to_vertices();
            self.upload(&vertices[..count]);
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Geometry Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            return;
        };
        if count == 0 {
            return;
        }

        render_pass.set_pipeline(self.pipelines.get(topology));
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..count as u32, 0..1);
    }

    fn upload(&mut self, vertices: &[Vertex]) {
        self.ensure_capacity(vertices.len());
        if let Some(vertex_buffer) = self.vertex_buffer.as_ref() {
            self.gpu
                .queue()
                .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }
    }

    fn ensure_capacity(&mut self, required: usize) {
        if required <= self.vertex_capacity && self.vertex_buffer.is_some() {
            return;
        }

        let max_vertices =
            (self.gpu.max_buffer_size() / std::mem::size_of::<Vertex>() as u64) as usize;
        let new_cap = grown_capacity(required).min(max_vertices);
        debug!("Growing vertex buffer to {} vertices", new_cap);

        self.vertex_buffer = Some(self.gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("Geometry Vertex Buffer"),
            size: (new_cap * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }

    fn builtin_pipelines(device: &Device, format: wgpu::TextureFormat) -> Pipelines {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Geometry Shader"),
            source: wgpu::ShaderSource::Wgsl(BUILTIN_SHADER.into()),
        });
        Pipelines::new(device, &shader, format)
    }

    async fn custom_pipelines(
        gpu: &GpuContext,
        path: &Path,
        format: wgpu::TextureFormat,
    ) -> Result<Pipelines> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read shader {}", path.display()))?;

        let device = gpu.device();
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Custom Geometry Shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        let pipelines = Pipelines::new(device, &shader, format);

        if let Some(e) = device.pop_error_scope().await {
            error!("Shader {} failed validation: {}", path.display(), e);
            anyhow::bail!("Custom shader {} rejected", path.display());
        }
        Ok(pipelines)
    }

    fn create_surface_config(
        surface: &Surface,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        // Generated colours are written as-is, without sRGB encoding
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("Surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        Ok(SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_topology_mapping() {
        assert_eq!(primitive_topology(Topology::Lines), wgpu::PrimitiveTopology::LineList);
        assert_eq!(primitive_topology(Topology::LineStrip), wgpu::PrimitiveTopology::LineStrip);
        assert_eq!(primitive_topology(Topology::Triangles), wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(primitive_topology(Topology::Points), wgpu::PrimitiveTopology::PointList);
    }

    #[test]
    fn test_grown_capacity() {
        assert_eq!(grown_capacity(0), 64);
        assert_eq!(grown_capacity(3), 64);
        assert_eq!(grown_capacity(65), 128);
        assert_eq!(grown_capacity(490_000), 524_288);
    }

    #[test]
    fn test_drawable_vertices_fits_whole_primitives() {
        let vertex = std::mem::size_of::<Vertex>() as u64;
        assert_eq!(drawable_vertices(10, 100 * vertex, Topology::Lines), 10);
        assert_eq!(drawable_vertices(100, 7 * vertex, Topology::Lines), 6);
        assert_eq!(drawable_vertices(100, 7 * vertex, Topology::Triangles), 6);
        assert_eq!(drawable_vertices(100, 7 * vertex, Topology::Points), 7);
    }

    #[test]
    fn test_builtin_shader_entry_points() {
        assert!(BUILTIN_SHADER.contains("fn vs_main"));
        assert!(BUILTIN_SHADER.contains("fn fs_main"));
    }
}
