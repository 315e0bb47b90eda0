//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Credential lookup and request settings
//! - The provider abstraction and the OpenWeatherMap client
//! - Shared domain models (query input, weather report) and errors
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{API_KEY_ENV, Config};
pub use error::{FetchError, InputError};
pub use model::{WeatherReport, WeatherRequest};
pub use provider::{OpenWeatherProvider, WeatherProvider};
