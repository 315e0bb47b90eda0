use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

/// The two questions the tool can ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    City,
    ApiKey,
}

impl Prompt {
    pub fn message(&self) -> &'static str {
        match self {
            Prompt::City => "Enter city name (example: Chennai): ",
            Prompt::ApiKey => "Enter your OpenWeatherMap API key: ",
        }
    }
}

/// Source of interactive answers. Answers are returned untrimmed.
pub trait Prompter {
    fn ask(&mut self, prompt: Prompt) -> Result<String>;
}

/// Interactive prompts on a terminal. The API key is masked while typing.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: Prompt) -> Result<String> {
        let message = prompt.message().trim_end();

        let answer = match prompt {
            Prompt::City => Text::new(message).prompt(),
            Prompt::ApiKey => Password::new(message)
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt(),
        };

        match answer {
            Ok(value) => Ok(value),
            // Esc means "no answer"; the caller reports it as missing input.
            Err(InquireError::OperationCanceled) => Ok(String::new()),
            Err(err) => Err(err).context("Failed to read interactive input"),
        }
    }
}

/// Line-oriented prompts for piped stdin: writes the prompt text, reads one line.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: Prompt) -> Result<String> {
        write!(self.output, "{}", prompt.message())?;
        self.output.flush()?;

        let mut line = String::new();
        // EOF leaves `line` empty, which reads as a missing answer.
        self.input.read_line(&mut line).context("Failed to read from stdin")?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_prompter_writes_exact_prompt_and_reads_lines() {
        let mut out = Vec::new();
        let mut prompter = LinePrompter::new(Cursor::new("Chennai\nKEY\n"), &mut out);

        assert_eq!(prompter.ask(Prompt::City).unwrap(), "Chennai\n");
        assert_eq!(prompter.ask(Prompt::ApiKey).unwrap(), "KEY\n");
        drop(prompter);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter city name (example: Chennai): Enter your OpenWeatherMap API key: "
        );
    }

    #[test]
    fn line_prompter_returns_empty_at_eof() {
        let mut prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask(Prompt::City).unwrap(), "");
    }
}
