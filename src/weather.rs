//! Weather lookup.
//!
//! The weather only flavours the seed and the title, so a lookup must never
//! stop a drawing: any failure becomes the literal `"Unknown"`.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const UNKNOWN_WEATHER: &str = "Unknown";
pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in/?format=j1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report has no current condition")]
    MissingCondition,
}

/// Something that can tell the current weather.
#[allow(async_fn_in_trait)]
pub trait WeatherSource {
    /// A short condition such as `"Partly cloudy"`, or `"Unknown"`.
    async fn current(&self) -> String;
}

/// A fixed answer, for offline runs and tests.
#[derive(Debug, Clone)]
pub struct FixedWeather(pub String);

impl FixedWeather {
    pub fn unknown() -> Self {
        Self(UNKNOWN_WEATHER.to_string())
    }
}

impl WeatherSource for FixedWeather {
    async fn current(&self) -> String {
        self.0.clone()
    }
}

#[derive(Debug, Deserialize)]
struct WttrReport {
    current_condition: Vec<WttrCondition>,
}

#[derive(Debug, Deserialize)]
struct WttrCondition {
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrValue>,
}

#[derive(Debug, Deserialize)]
struct WttrValue {
    value: String,
}

/// Pull the condition text out of a wttr.in `format=j1` report.
pub fn parse_report(body: &str) -> Result<String, WeatherError> {
    let report: WttrReport = serde_json::from_str(body)?;
    report
        .current_condition
        .into_iter()
        .next()
        .and_then(|c| c.weather_desc.into_iter().next())
        .map(|d| d.value.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(WeatherError::MissingCondition)
}

/// wttr.in over HTTP.
pub struct WttrWeather {
    client: Option<reqwest::Client>,
    url: String,
}

impl WttrWeather {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| warn!("weather client unavailable: {e}"))
            .ok();
        Self {
            client,
            url: url.to_string(),
        }
    }

    async fn fetch(&self, client: &reqwest::Client) -> Result<String, WeatherError> {
        let response = client.get(&self.url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(WeatherError::Status(status.as_u16()));
        }
        parse_report(&response.text().await?)
    }
}

impl Default for WttrWeather {
    fn default() -> Self {
        Self::new(DEFAULT_WEATHER_URL, DEFAULT_TIMEOUT)
    }
}

impl WeatherSource for WttrWeather {
    async fn current(&self) -> String {
        let Some(client) = &self.client else {
            return UNKNOWN_WEATHER.to_string();
        };
        match self.fetch(client).await {
            Ok(weather) => {
                debug!(%weather, "weather lookup succeeded");
                weather
            }
            Err(e) => {
                warn!("weather lookup failed: {e}");
                UNKNOWN_WEATHER.to_string()
            }
        }
    }
}
