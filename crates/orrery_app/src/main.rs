use anyhow::Context;
use tracing::{info, warn};

use orrery_app::app::App;
use orrery_app::config::{AppConfig, ConfigSource};
use orrery_core::Simulation;
use render_wgpu::winit::event_loop::EventLoop;

fn main() -> anyhow::Result<()> {
    let (config, source) = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level.level_filter())
        .with_target(false)
        .init();

    match &source {
        ConfigSource::Loaded(path) => info!(path = %path.display(), "loaded configuration"),
        ConfigSource::CreatedDefault(path) => {
            warn!(path = %path.display(), "no config file found, wrote defaults")
        }
    }

    let simulation = Simulation::new(&config.bodies, config.sim_settings())
        .context("failed to build the body catalog")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config, simulation)?;
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;
    app.finish()
}
