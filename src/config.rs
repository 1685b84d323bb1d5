//! Configuration loading for abstdraw.
//!
//! Configuration is loaded from TOML files with environment variable overrides.

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "config.default.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AbstdrawConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default)]
    pub save_bundle: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            save_bundle: false,
        }
    }
}

fn default_directory() -> String {
    "output".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_grid_width")]
    pub grid_width: usize,

    #[serde(default = "default_grid_height")]
    pub grid_height: usize,

    #[serde(default = "default_max_points")]
    pub max_points: usize,

    #[serde(default)]
    pub text_only: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            grid_width: default_grid_width(),
            grid_height: default_grid_height(),
            max_points: default_max_points(),
            text_only: false,
        }
    }
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    800
}

fn default_grid_width() -> usize {
    60
}

fn default_grid_height() -> usize {
    30
}

fn default_max_points() -> usize {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default = "default_point_budget")]
    pub point_budget: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            point_budget: default_point_budget(),
        }
    }
}

fn default_style() -> String {
    "auto".to_string()
}

fn default_point_budget() -> usize {
    crate::engine::DEFAULT_POINTS
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_enabled")]
    pub enabled: bool,

    #[serde(default = "default_weather_url")]
    pub url: String,

    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            enabled: default_weather_enabled(),
            url: default_weather_url(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_weather_enabled() -> bool {
    true
}

fn default_weather_url() -> String {
    crate::weather::DEFAULT_WEATHER_URL.to_string()
}

fn default_weather_timeout() -> u64 {
    crate::weather::DEFAULT_TIMEOUT.as_secs()
}

impl AbstdrawConfig {
    /// Defaults file, then `path`, then `ABSTDRAW_<SECTION>__<KEY>`
    /// environment variables. A config that does not deserialize falls back
    /// to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("ABSTDRAW")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let abstdraw_config = config.try_deserialize().unwrap_or_else(|e| {
            warn!("ignoring malformed configuration: {e}");
            AbstdrawConfig::default()
        });
        Ok(abstdraw_config)
    }
}
