use reqwest::StatusCode;
use thiserror::Error;

use crate::config::API_KEY_VAR;

/// Broad category of a [`ForecastError`], used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Transport,
    Decode,
}

/// Every way a single forecast lookup can fail.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The API key environment variable is unset or empty.
    #[error("{} is not defined", API_KEY_VAR)]
    MissingApiKey,

    /// The service endpoint could not be turned into a request URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Connection, DNS, timeout or body-read failure. The cause is the error source.
    #[error("failed to {context}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("OpenWeather request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// The body was not the expected JSON shape.
    #[error("failed to decode forecast JSON")]
    Decode(#[from] serde_json::Error),
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::MissingApiKey => ErrorKind::Config,
            ForecastError::InvalidEndpoint { .. }
            | ForecastError::Transport { .. }
            | ForecastError::Status { .. } => ErrorKind::Transport,
            ForecastError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Process exit code for this failure: 1 config, 2 transport, 3 decode.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Config => 1,
            ErrorKind::Transport => 2,
            ErrorKind::Decode => 3,
        }
    }
}
