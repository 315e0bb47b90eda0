use anyhow::Result;
use std::time::Duration;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Current-weather endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request settings. The binary only ever uses `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

/// Raw value of [`API_KEY_ENV`], if set and valid unicode.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok()
}

/// Ordered credential lookup: environment first, then `prompt`.
///
/// `prompt` runs at most once, and only when the environment value is absent
/// or blank. Returns `Ok(None)` when neither source produced a key.
pub fn resolve_api_key<F>(env_value: Option<String>, prompt: F) -> Result<Option<String>>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(key) = non_blank(env_value) {
        return Ok(Some(key));
    }

    Ok(non_blank(Some(prompt()?)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
