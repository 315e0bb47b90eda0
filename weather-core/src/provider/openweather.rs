use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::{Config, FetchError, WeatherReport, WeatherRequest};

use super::{WeatherProvider, api_message};

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    endpoint: Url,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid weather endpoint: {}", config.endpoint))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { endpoint, http })
    }

    /// Full GET URL for `request`, metric units.
    pub fn request_url(&self, request: &WeatherRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", request.city())
            .append_pair("appid", request.api_key())
            .append_pair("units", "metric");
        url
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, request: &WeatherRequest) -> Result<WeatherReport, FetchError> {
        info!(city = request.city(), "requesting current weather");

        let res = self.http.get(self.request_url(request)).send().await?;
        let status = res.status();
        debug!(%status, "weather service responded");

        if !status.is_success() {
            let api_message = match res.text().await {
                Ok(body) => {
                    debug!(body = %truncate_body(&body), "error body");
                    api_message(&body)
                }
                Err(err) => {
                    debug!(error = %err.without_url(), "could not read error body");
                    None
                }
            };
            return Err(FetchError::Status { status, api_message });
        }

        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
