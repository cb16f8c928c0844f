use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context};
use glam::Vec2;
use input_bindings::KeyBindings;
use orrery_core::{FramePacer, Simulation};
use render_wgpu::winit as rwinit;
use render_wgpu::{compose, wgpu, FrameGraph, Gfx, SceneStyle};
use tracing::{debug, error, info, warn};

use rwinit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowId},
};

use crate::config::AppConfig;

mod state;
pub use state::InputQueue;

/// Owns the simulation and every platform handle for the lifetime of the
/// event loop. Startup failures are parked in `error` and surface from
/// [`App::finish`].
pub struct App {
    config: AppConfig,
    simulation: Simulation,
    bindings: KeyBindings,
    style: SceneStyle,
    help: Vec<String>,
    fg: FrameGraph,
    gfx: Option<Gfx>,
    pacer: FramePacer,
    input: InputQueue,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: AppConfig, simulation: Simulation) -> anyhow::Result<Self> {
        let pacer = FramePacer::new_fixed_hz(config.simulation.target_fps, Instant::now())
            .context("target_fps must be at least 1")?;
        let bindings = KeyBindings::default();
        let style = SceneStyle::default();
        Ok(Self {
            help: bindings.help_lines(),
            fg: FrameGraph::new().clear_rgb(style.background).scene(),
            config,
            simulation,
            bindings,
            style,
            gfx: None,
            pacer,
            input: InputQueue::default(),
            error: None,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Result of the run once the event loop has returned.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.gfx = None;
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, el: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        self.error = Some(err);
        el.exit();
    }

    fn viewport(&self) -> Vec2 {
        Vec2::new(self.config.window.width as f32, self.config.window.height as f32)
    }

    fn create_gfx(&self, el: &ActiveEventLoop) -> anyhow::Result<Gfx> {
        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(el.create_window(attrs).context("failed to create window")?);
        let gfx = Gfx::new(window, self.config.window.vsync).context("failed to initialise renderer")?;
        Ok(gfx)
    }

    fn redraw(&mut self, el: &ActiveEventLoop) {
        let scene = compose(&self.simulation, self.viewport(), &self.style, &self.help);
        let Some(g) = self.gfx.as_mut() else {
            return;
        };
        match g.render_scene(&self.fg, &scene) {
            Ok(()) => {
                if let Some(fps) = self.pacer.record_frame(Instant::now()) {
                    debug!(fps, target_hz = self.pacer.target_hz(), "frame rate");
                }
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost, reconfiguring");
                let sz = g.size();
                g.resize(sz);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(el, anyhow!("GPU out of memory"));
            }
            Err(e) => warn!("frame skipped: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, el: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match self.create_gfx(el) {
            Ok(gfx) => {
                info!(adapter = gfx.adapter_name(), "window open");
                self.gfx = Some(gfx);
            }
            Err(err) => self.fail(el, err),
        }
    }

    fn window_event(&mut self, el: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(g) = self.gfx.as_mut() {
            g.on_window_event(&event);
        }
        self.input.on_event(&self.bindings, &event);

        match event {
            WindowEvent::Resized(sz) => {
                if let Some(g) = self.gfx.as_mut() {
                    g.resize(sz);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(el),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, el: &ActiveEventLoop) {
        if self.error.is_some() {
            return;
        }
        let now = Instant::now();
        if self.pacer.is_due(now) {
            self.simulation.frame(self.input.drain());
            if !self.simulation.state().is_running() {
                info!(
                    simulated_days = self.simulation.elapsed_days(),
                    "simulation stopped"
                );
                el.exit();
                return;
            }
            if let Some(g) = self.gfx.as_ref() {
                g.request_redraw();
            }
            self.pacer.advance(now);
        }
        el.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_deadline()));
    }

    fn exiting(&mut self, _el: &ActiveEventLoop) {
        // release GPU resources while the event loop is still alive
        self.gfx = None;
    }
}
