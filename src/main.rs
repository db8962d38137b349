use std::sync::Arc;

use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use hexagon_ring::cli::Cli;
use hexagon_ring::color::ColorGenerator;
use hexagon_ring::control_panel::ControlPanel;
use hexagon_ring::frame::{Clock, FrameStats};
use hexagon_ring::renderer::{GpuMesh, Renderer, UiFrame};
use hexagon_ring::{ParameterChange, Visualization};

const WINDOW_TITLE: &str = "Hexagon Ring";
// Pixel-precise wheels report far larger deltas than line-based ones
const PIXELS_PER_ZOOM_STEP: f32 = 50.0;

/// Everything created once the window exists
struct Running {
    window: Arc<Window>,
    renderer: Renderer,
    visualization: Visualization<GpuMesh>,
}

struct App {
    cli: Cli,
    running: Option<Running>,
    panel: ControlPanel,
    clock: Clock,
    stats: FrameStats,
}

impl App {
    fn new(cli: Cli) -> Self {
        let panel = ControlPanel::new(cli.parameters(), !cli.no_ui);
        Self {
            cli,
            running: None,
            panel,
            clock: Clock::new(),
            stats: FrameStats::new(),
        }
    }

    fn bootstrap(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Running> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_transparent(true)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            )?,
        );

        let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
        let (width, height) = renderer.size();
        let visualization = Visualization::new(
            self.panel.parameters(),
            self.cli.segments,
            ColorGenerator::from_seed(self.cli.seed),
            (width, height),
            renderer.meshes_mut(),
        );

        info!(
            "Ring ready: {} elements over {:.1} degrees ({} segments)",
            visualization.scene().len(),
            visualization.parameters().angle,
            visualization.scene().segments()
        );

        Ok(Running {
            window,
            renderer,
            visualization,
        })
    }

    /// One iteration of the frame loop
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        if let Some(fps) = self.stats.record(delta) {
            debug!("FPS: {:.1}", fps);
        }

        let Some(running) = &mut self.running else {
            return;
        };

        running.visualization.update();
        let ui = Self::run_panel(running, &mut self.panel, &self.stats);
        Self::draw(running, ui, event_loop);
    }

    /// Lay out the panel and apply whatever it changed before drawing
    fn run_panel(
        running: &mut Running,
        panel: &mut ControlPanel,
        stats: &FrameStats,
    ) -> Option<UiFrame> {
        let mut changes: Vec<ParameterChange> = Vec::new();
        let ui = panel.is_visible().then(|| {
            running.renderer.run_ui(&running.window, |ctx| {
                panel.show(ctx, stats, |change| changes.push(change));
            })
        });

        running
            .visualization
            .apply_all(changes, running.renderer.meshes_mut());
        ui
    }

    fn draw(
        running: &mut Running,
        ui: Option<UiFrame>,
        event_loop: &ActiveEventLoop,
    ) {
        let scene = running.visualization.scene();
        let camera = running.visualization.camera();
        match running.renderer.render(scene, camera, ui) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                running.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {}", e),
        }
    }

    /// Viewport changed: update the camera and output size, draw right away
    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>, event_loop: &ActiveEventLoop) {
        let Some(running) = &mut self.running else {
            return;
        };
        info!("Resized to {}x{}", size.width, size.height);
        running.visualization.resize(size.width, size.height);
        running.renderer.resize(size.width, size.height);
        if size.width > 0 && size.height > 0 {
            let ui = Self::run_panel(running, &mut self.panel, &self.stats);
            Self::draw(running, ui, event_loop);
        }
    }

    fn pointer_event(&mut self, event: &WindowEvent) {
        let Some(running) = &mut self.running else {
            return;
        };
        let camera = running.visualization.camera_mut();
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => camera.begin_drag(),
                ElementState::Released => camera.end_drag(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                camera.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => camera.zoom(*y),
                MouseScrollDelta::PixelDelta(p) => camera.zoom(p.y as f32 / PIXELS_PER_ZOOM_STEP),
            },
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.bootstrap(event_loop) {
            Ok(running) => self.running = Some(running),
            Err(e) => {
                error!("Failed to start: {:#}", e);
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
        // A release must always end the drag, even over the panel
        if let WindowEvent::MouseInput {
            state: ElementState::Released,
            ..
        } = event
        {
            self.pointer_event(&event);
        }

        // Let egui handle the event first
        if let Some(running) = &mut self.running {
            if running.renderer.handle_event(&running.window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size, event_loop),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            WindowEvent::MouseInput { .. }
            | WindowEvent::CursorMoved { .. }
            | WindowEvent::MouseWheel { .. } => self.pointer_event(&event),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &self.running {
            running.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(running) = &mut self.running {
            running.visualization.shutdown(running.renderer.meshes_mut());
            debug!("Released meshes, {} still live", running.renderer.meshes().live());
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!(
        "Starting with count={} angle={} segments={}",
        cli.count, cli.angle, cli.segments
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    info!("Controls: drag to orbit, wheel to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
