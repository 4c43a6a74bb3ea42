use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("authentication failed ({status}): {body}")]
    Authentication { status: StatusCode, body: String },

    #[error("validation failed: {message}")]
    Validation {
        message: String,
        fields: Option<Value>,
    },

    #[error("request failed ({status}): {body}")]
    Request { status: StatusCode, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Local field-validation failure, with no remote error body attached.
    pub(crate) fn invalid_field(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            fields: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
