use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Backend error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error body returned by the backend: `{ success: false, status, message }`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: String,
}

impl RepositoryError {
    /// Builds the error for a failed response from its HTTP status and body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
        let status = envelope
            .as_ref()
            .and_then(|envelope| envelope.status)
            .unwrap_or(status);

        if status == 404 {
            return RepositoryError::NotFound;
        }

        let message = match envelope {
            Some(envelope) if !envelope.message.is_empty() => envelope.message,
            _ => body.trim().to_string(),
        };

        RepositoryError::Api { status, message }
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::InvalidPayload(err.to_string())
        } else {
            RepositoryError::RequestFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::InvalidPayload(err.to_string())
    }
}
