use std::io;
use thiserror::Error;

/// Generic message when the endpoint fails without a usable error envelope.
pub const GENERIC_API_FAILURE: &str = "API request failed";

/// Message for a 2xx response without the expected text field.
pub const INVALID_RESPONSE: &str = "Invalid response from API.";

/// Status shown when the user submits an empty sample.
pub const EMPTY_INPUT: &str = "Please enter code to evolve";

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents input validation errors (e.g., an empty code sample).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents a non-2xx answer from the generation endpoint.
    #[error("API error: {0}")]
    Api(String),

    /// Represents a 2xx answer that does not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Represents connection-level HTTP failures.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Represents errors specific to the actor system, such as communication failures.
    #[error("Actor error: {0}")]
    Actor(#[from] crate::actors::messages::ActorError),

    /// Represents configuration-related errors (e.g., missing environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Another evolve request is still in flight.
    #[error("An evolve request is already in progress")]
    Busy,

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The message surfaced to the user in the status line, without the
    /// variant prefix used by `Display`.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(s)
            | AppError::Api(s)
            | AppError::InvalidResponse(s)
            | AppError::Transport(s)
            | AppError::Config(s)
            | AppError::Timeout(s)
            | AppError::Internal(s) => s.clone(),
            AppError::Actor(e) => e.to_string(),
            AppError::Io(e) => e.to_string(),
            AppError::Busy => self.to_string(),
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Api(s) => AppError::Api(s.clone()),
            AppError::InvalidResponse(s) => AppError::InvalidResponse(s.clone()),
            AppError::Transport(s) => AppError::Transport(s.clone()),
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Timeout(s) => AppError::Timeout(s.clone()),
            AppError::Busy => AppError::Busy,
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err.without_url()))
        } else {
            AppError::Transport(format!("HTTP error: {}", err.without_url()))
        }
    }
}
