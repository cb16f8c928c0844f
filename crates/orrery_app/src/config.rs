//! Configuration system for the orrery
//!
//! Loads settings from `config/settings.json` or creates default if missing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glam::DVec2;
use orrery_core::{catalog, solar_system, BodySpec, Projection, SimSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write config file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("invalid body catalog: {0}")]
    Catalog(#[from] catalog::CatalogError),
}

/// Logging verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Errors only
    Silent,
    /// Startup, pause/quit events (default)
    Summary,
    /// Summary + speed changes and frame rate
    Normal,
    /// Everything
    Verbose,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Summary
    }
}

impl LogLevel {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Silent => LevelFilter::ERROR,
            Self::Summary => LevelFilter::INFO,
            Self::Normal => LevelFilter::DEBUG,
            Self::Verbose => LevelFilter::TRACE,
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded(PathBuf),
    CreatedDefault(PathBuf),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Time stepping and projection
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Body catalog, Sun first
    #[serde(default = "solar_system")]
    pub bodies: Vec<BodySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Logical width in pixels
    pub width: u32,

    /// Logical height in pixels
    pub height: u32,

    pub title: String,

    /// Enable VSync (Fifo presentation mode)
    #[serde(default = "default_vsync")]
    pub vsync: bool,
}

fn default_vsync() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target FPS (frames per second)
    pub target_fps: u32,

    /// Simulated days per frame at speed 1.0
    pub time_step_days: f64,

    /// Pixels per astronomical unit
    pub distance_scale: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 1920,
                height: 1000,
                title: "Solar System Simulation".to_string(),
                vsync: true,
            },
            simulation: SimulationConfig {
                target_fps: 60,
                time_step_days: 1.0,
                distance_scale: 30.0,
            },
            log_level: LogLevel::Summary,
            bodies: solar_system(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/settings.json`, or create default if missing
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let (config, source) = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config: AppConfig =
                serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            (config, ConfigSource::Loaded(path.to_path_buf()))
        } else {
            let config = Self::default();
            config.save_to(path)?;
            (config, ConfigSource::CreatedDefault(path.to_path_buf()))
        };
        config.validate()?;
        Ok((config, source))
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be non-zero",
                self.window.width, self.window.height
            )));
        }
        if self.simulation.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }
        if !(self.simulation.time_step_days.is_finite() && self.simulation.time_step_days > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "time_step_days must be positive, got {}",
                self.simulation.time_step_days
            )));
        }
        if !(self.simulation.distance_scale.is_finite() && self.simulation.distance_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "distance_scale must be positive, got {}",
                self.simulation.distance_scale
            )));
        }
        catalog::validate(&self.bodies)?;
        Ok(())
    }

    /// Scene centre uses whole pixels: (1920, 1000) -> (960, 500).
    pub fn sim_settings(&self) -> SimSettings {
        let center = DVec2::new(
            (self.window.width / 2) as f64,
            (self.window.height / 2) as f64,
        );
        SimSettings {
            base_step_days: self.simulation.time_step_days,
            projection: Projection::new(center, self.simulation.distance_scale),
        }
    }

    fn config_path() -> PathBuf {
        Path::new("config").join("settings.json")
    }
}
