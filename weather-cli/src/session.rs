//! One run of the tool: ask, fetch once, print.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};
use weather_core::{InputError, WeatherProvider, WeatherRequest, config};

use crate::{
    output::{self, FAREWELL},
    prompt::{Prompt, Prompter},
};

/// How a run ended. Every variant is a normal exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    CityMissing,
    ApiKeyMissing,
    FetchFailed,
}

pub async fn run<P, W>(
    prompter: &mut P,
    env_api_key: Option<String>,
    provider: &dyn WeatherProvider,
    out: &mut W,
) -> Result<Outcome>
where
    P: Prompter,
    W: Write,
{
    let request = match read_request(prompter, env_api_key)? {
        Ok(request) => request,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(match err {
                InputError::CityMissing => Outcome::CityMissing,
                InputError::ApiKeyMissing => Outcome::ApiKeyMissing,
            });
        }
    };

    match provider.current_weather(&request).await {
        Ok(report) => {
            output::write_report(out, &report)?;
            writeln!(out, "{FAREWELL}")?;
            Ok(Outcome::Reported)
        }
        Err(err) => {
            info!(error = %err, "weather request failed");
            output::write_fetch_error(out, &err)?;
            debug!("run finished without a report");
            Ok(Outcome::FetchFailed)
        }
    }
}

/// Ask for the city, then resolve the key. A blank city stops before the
/// key prompt; `WeatherRequest::new` does the rest of the validation.
fn read_request<P: Prompter>(
    prompter: &mut P,
    env_api_key: Option<String>,
) -> Result<Result<WeatherRequest, InputError>> {
    let city = prompter.ask(Prompt::City)?;
    if city.trim().is_empty() {
        return Ok(Err(InputError::CityMissing));
    }

    let api_key = config::resolve_api_key(env_api_key, || prompter.ask(Prompt::ApiKey))?;
    Ok(WeatherRequest::new(&city, api_key.as_deref().unwrap_or_default()))
}
