use std::io::{self, IsTerminal};

use clap::Parser;
use tracing::debug;
use weather_core::{Config, OpenWeatherProvider, config};

use crate::{
    prompt::{LinePrompter, TerminalPrompter},
    session::{self, Outcome},
};

/// Top-level CLI struct.
///
/// The tool is interactive; flags are limited to `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Show the current weather for a city",
    long_about = "Show the current weather for a city.\n\n\
                  Prompts for a city name, then reads the OpenWeatherMap API key from \
                  OPENWEATHER_API_KEY or prompts for it."
)]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<Outcome> {
        let provider = OpenWeatherProvider::new(&Config::default())?;
        let env_api_key = config::api_key_from_env();
        let mut out = io::stdout();

        let outcome = if io::stdin().is_terminal() {
            session::run(&mut TerminalPrompter, env_api_key, &provider, &mut out).await?
        } else {
            let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
            session::run(&mut prompter, env_api_key, &provider, &mut out).await?
        };

        debug!(?outcome, "session finished");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_accepts_no_arguments() {
        assert!(Cli::try_parse_from(["weather"]).is_ok());
        assert!(Cli::try_parse_from(["weather", "Chennai"]).is_err());
    }
}
