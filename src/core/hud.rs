use winit::event::WindowEvent;
use winit::window::Window;

use super::gpu_context::GpuContext;
use crate::viewer::Frame;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(74, 158, 255);

/// Text shown in the overlay for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudLines {
    pub title: String,
    pub details: String,
}

impl HudLines {
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            title: format!("{}  {}", frame.scene.number(), frame.scene.name()),
            details: format!(
                "level {}  |  {} vertices  |  {:.1} ms",
                frame.level,
                frame.vertex_count(),
                frame.elapsed.as_secs_f64() * 1000.0
            ),
        }
    }
}

/// egui overlay drawn on top of the geometry pass
pub struct Hud {
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl Hud {
    pub fn new(window: &Window, gpu: &GpuContext, format: wgpu::TextureFormat) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            gpu.device(),
            format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            egui_renderer,
            egui_state,
            egui_ctx,
        }
    }

    /// Returns true when egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    /// Record the overlay pass into `encoder`, loading what is already in `view`
    pub fn draw(
        &mut self,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
        size_in_pixels: [u32; 2],
        lines: &HudLines,
    ) {
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("HUD")
                .title_bar(false)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(&lines.title)
                            .size(18.0)
                            .color(ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(&lines.details)
                            .size(12.0)
                            .color(egui::Color32::GRAY),
                    );
                });
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(gpu.device(), gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            gpu.device(),
            gpu.queue(),
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("HUD Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // egui-wgpu wants a 'static pass; it is dropped before the encoder is used again
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}
