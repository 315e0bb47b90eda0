use serde::Deserialize;
use serde_json::Number;

use crate::error::InputError;

/// A validated query: both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    city: String,
    api_key: String,
}

impl WeatherRequest {
    pub fn new(city: &str, api_key: &str) -> Result<Self, InputError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(InputError::CityMissing);
        }

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(InputError::ApiKeyMissing);
        }

        Ok(Self { city: city.to_owned(), api_key: api_key.to_owned() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Narrowed view over the current-weather payload.
///
/// Every field is optional. Numbers are kept as `serde_json::Number` so they
/// print the way the provider sent them (`30` stays `30`, `3.1` stays `3.1`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    main: Option<Main>,
    #[serde(default)]
    weather: Option<Vec<Condition>>,
    #[serde(default)]
    wind: Option<Wind>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct Main {
    #[serde(default)]
    temp: Option<Number>,
    #[serde(default)]
    feels_like: Option<Number>,
    #[serde(default)]
    humidity: Option<Number>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct Condition {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct Wind {
    #[serde(default)]
    speed: Option<Number>,
}

impl WeatherReport {
    pub fn location_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn temperature_c(&self) -> Option<&Number> {
        self.main.as_ref()?.temp.as_ref()
    }

    pub fn feels_like_c(&self) -> Option<&Number> {
        self.main.as_ref()?.feels_like.as_ref()
    }

    /// Description of the first reported condition, if any.
    pub fn condition(&self) -> Option<&str> {
        self.weather.as_ref()?.first()?.description.as_deref()
    }

    pub fn humidity_pct(&self) -> Option<&Number> {
        self.main.as_ref()?.humidity.as_ref()
    }

    pub fn wind_speed_mps(&self) -> Option<&Number> {
        self.wind.as_ref()?.speed.as_ref()
    }
}
