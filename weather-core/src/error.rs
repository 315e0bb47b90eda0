pub use reqwest::StatusCode;
use thiserror::Error;

/// Missing user input. Both variants end the run before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("City name cannot be empty. Please run again.")]
    CityMissing,

    #[error("API key is required. Please run again.")]
    ApiKeyMissing,
}

/// Failure of the single weather request.
///
/// `Decode` means the provider answered 2xx with something that is not a
/// weather payload. It is reported like a network failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with a non-2xx status.
    #[error("HTTP status {status}")]
    Status {
        status: StatusCode,
        /// `message` field of the error body, when there was one.
        api_message: Option<String>,
    },

    /// Timeout, DNS failure, refused connection, truncated body.
    #[error("{}", source_chain(.0))]
    Network(#[source] reqwest::Error),

    #[error("Failed to parse weather JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries the API key.
        FetchError::Network(err.without_url())
    }
}

/// `err` and its sources joined with `: `, so a timeout and a refused
/// connection read differently.
fn source_chain(err: &reqwest::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut next: Option<&(dyn std::error::Error + 'static)> = Some(err);

    while let Some(e) = next {
        let text = e.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        next = e.source();
    }

    let mut detail = parts.join(": ");
    if err.is_timeout() && !detail.contains("timed out") {
        detail.push_str(": request timed out");
    }
    detail
}
