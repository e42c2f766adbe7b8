// web_app/error.rs - Errors raised while talking to the recommendation service

use serde::{Deserialize, Serialize};

/// Failure of one request to the recommendation service
///
/// Transport and decoding problems are not told apart in what the user
/// sees; the variants exist for logging.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl From<leptos::prelude::ServerFnError> for FetchError {
    fn from(err: leptos::prelude::ServerFnError) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Invalid server configuration
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}
