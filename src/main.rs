use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_viewer::cli::Cli;
use scene_viewer::core::{Clock, FpsCounter, Viewport, ViewportSize};
use scene_viewer::scene::{MaterialPalette, OrbitController};
use scene_viewer::window::{RedrawScheduler, WgpuBackend, WindowMount};
use scene_viewer::{SceneDescription, ViewerConfig};

const WINDOW_TITLE: &str = "Scene Viewer";

type WindowViewport = Viewport<WgpuBackend, WindowMount, RedrawScheduler>;

fn load_description(cli: &Cli) -> anyhow::Result<SceneDescription> {
    if cli.reads_stdin() {
        SceneDescription::from_reader(io::stdin().lock())
            .context("Failed to read scene description from stdin")
    } else {
        SceneDescription::load(&cli.scene)
            .with_context(|| format!("Failed to load scene {}", cli.scene.display()))
    }
}

fn window_title(description: &SceneDescription) -> String {
    match description.metadata.as_ref().and_then(|m| m.label()) {
        Some(label) => format!("{} - {}", WINDOW_TITLE, label),
        None => WINDOW_TITLE.to_string(),
    }
}

struct App {
    cli: Cli,
    config: ViewerConfig,
    description: SceneDescription,
    window: Option<Arc<Window>>,
    viewport: Option<WindowViewport>,
    controller: OrbitController,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(cli: Cli, description: SceneDescription) -> Self {
        let config = cli.viewer_config();
        Self {
            cli,
            config,
            description,
            window: None,
            viewport: None,
            controller: OrbitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(),
        }
    }

    fn create_viewport(&self, window: Arc<Window>) -> anyhow::Result<WindowViewport> {
        let backend = pollster::block_on(WgpuBackend::new(window.clone(), &self.config))
            .context("Failed to initialize GPU")?;
        Ok(Viewport::new(
            backend,
            WindowMount::new(window.clone()),
            RedrawScheduler::new(window),
            MaterialPalette::standard(),
            self.config.clone(),
        ))
    }

    fn show(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(viewport), Some(window)) = (self.viewport.as_mut(), self.window.as_ref()) else {
            return;
        };
        window.set_title(&window_title(&self.description));
        if let Err(e) = viewport.show(&self.description) {
            log::error!("Failed to show scene: {}", e);
            event_loop.exit();
        }
    }

    fn reload(&mut self, event_loop: &ActiveEventLoop) {
        if self.cli.reads_stdin() {
            log::warn!("Scene was read from stdin, nothing to reload");
            return;
        }
        match load_description(&self.cli) {
            Ok(description) => {
                self.description = description;
                self.show(event_loop);
            }
            Err(e) => log::error!("Reload failed, keeping current scene: {:#}", e),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let Some(handle) = viewport.scheduler_mut().take_due() else {
            return;
        };

        if let Some(scene) = viewport.scene_mut() {
            self.controller.update(&mut scene.camera);
        }

        let delta = self.clock.tick();
        if let Some(fps) = self.fps.record(delta) {
            log::info!("{:.1} fps", fps);
        }

        if let Err(e) = viewport.on_frame(handle, self.clock.elapsed()) {
            log::error!("Render error: {}", e);
            event_loop.exit();
        }
    }

    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        // Dropping the viewport releases the session before the window goes
        self.viewport = None;
        self.window = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        self.config.width,
                        self.config.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            match self.create_viewport(window.clone()) {
                Ok(viewport) => self.viewport = Some(viewport),
                Err(e) => {
                    log::error!("{:#}", e);
                    event_loop.exit();
                    return;
                }
            }
            self.window = Some(window);
        }

        if self.viewport.as_ref().is_some_and(|v| !v.is_active()) {
            self.show(event_loop);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.unmount();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
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
            } => self.quit(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        repeat: false,
                        ..
                    },
                ..
            } => self.reload(event_loop),
            WindowEvent::KeyboardInput { event, .. } => self.controller.process_keyboard(&event),
            WindowEvent::Resized(size) => {
                if let Some(viewport) = self.viewport.as_mut() {
                    viewport.resize(ViewportSize::new(size.width, size.height));
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let description = load_description(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, description);

    println!("Scene Viewer - Controls: W/S zoom, A/D orbit, Q/E raise/lower, R reload, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
