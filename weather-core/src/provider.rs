use crate::{FetchError, WeatherReport, WeatherRequest};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for the current weather. No retries.
    async fn current_weather(&self, request: &WeatherRequest) -> Result<WeatherReport, FetchError>;
}

/// Best-effort extraction of the `message` field from an error body.
///
/// Anything that is not a JSON object with a non-empty string or numeric
/// `message` yields `None`.
pub fn api_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("message")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
