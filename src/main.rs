use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use fractal_viewer::cli::Cli;
use fractal_viewer::core::input_adapter::key_from_event;
use fractal_viewer::core::{CommandOutcome, GeometryRenderer, Hud, HudLines};
use fractal_viewer::dump::FrameDump;
use fractal_viewer::logging::init_logging;
use fractal_viewer::{Viewer, ViewerConfig};

struct Graphics {
    window: Arc<Window>,
    renderer: GeometryRenderer,
    hud: Option<Hud>,
}

impl Graphics {
    fn new(event_loop: &ActiveEventLoop, config: &ViewerConfig) -> Result<Self> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(config.title.as_str())
                    .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height)),
            )?,
        );

        let renderer = pollster::block_on(GeometryRenderer::new(
            window.clone(),
            config.shader.as_deref(),
        ))?;
        let hud = config
            .show_hud
            .then(|| Hud::new(&window, renderer.gpu(), renderer.format()));

        Ok(Self {
            window,
            renderer,
            hud,
        })
    }

    fn render(&mut self, viewer: &mut Viewer) {
        let output = match self.renderer.acquire() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                self.renderer.reconfigure();
                self.window.request_redraw();
                return;
            }
            Err(e) => {
                error!("Render error: {}", e);
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame = viewer.frame();

        let mut encoder =
            self.renderer
                .gpu()
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        self.renderer
            .draw(&mut encoder, &view, &frame.buffer, frame.topology);

        if let Some(hud) = &mut self.hud {
            let (width, height) = self.renderer.dimensions();
            hud.draw(
                self.renderer.gpu(),
                &mut encoder,
                &view,
                &self.window,
                [width, height],
                &HudLines::from_frame(&frame),
            );
        }

        self.renderer
            .gpu()
            .queue()
            .submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

struct App {
    config: ViewerConfig,
    viewer: Viewer,
    graphics: Option<Graphics>,
}

impl App {
    fn new(config: ViewerConfig, viewer: Viewer) -> Self {
        Self {
            config,
            viewer,
            graphics: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match Graphics::new(event_loop, &self.config) {
            Ok(graphics) => {
                graphics.window.request_redraw();
                self.graphics = Some(graphics);
            }
            Err(e) => {
                error!("Failed to initialize viewer: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(graphics) = &mut self.graphics else {
            return;
        };

        if let Some(hud) = &mut graphics.hud {
            if hud.handle_event(&graphics.window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                graphics.renderer.resize(size.width, size.height);
                graphics.window.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key) = key_from_event(&event) else {
                    return;
                };
                match self.viewer.handle_key(key) {
                    CommandOutcome::Redraw => graphics.window.request_redraw(),
                    CommandOutcome::Unchanged => {}
                    CommandOutcome::Exit => event_loop.exit(),
                }
            }
            WindowEvent::RedrawRequested => graphics.render(&mut self.viewer),
            _ => {}
        }
    }
}

fn dump_frame(viewer: &mut Viewer, path: &std::path::Path) -> Result<()> {
    let frame = viewer.frame();
    FrameDump::from_frame(&frame).write(path)?;
    info!(
        "Wrote {} vertices of {} to {}",
        frame.vertex_count(),
        frame.scene,
        path.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    let config = ViewerConfig::resolve(&cli)?;
    let mut viewer = Viewer::new(config.controller()?, config.viewport(), config.fern_seed);

    if let Some(path) = &cli.dump {
        return dump_frame(&mut viewer, path);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    info!("Fractal Viewer - Controls: 1-7 scene, Left/Right scene, Up/Down level, Escape to quit");
    let mut app = App::new(config, viewer);
    event_loop.run_app(&mut app)?;

    Ok(())
}
