//! Use cases behind the dashboard endpoints.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod listing;
pub mod search;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::RequestFailed(message) => ServiceError::RequestFailed(message),
            RepositoryError::Api { status, message } => {
                ServiceError::RequestFailed(format!("backend returned {status}: {message}"))
            }
            RepositoryError::InvalidPayload(message) => {
                ServiceError::RequestFailed(format!("malformed backend payload: {message}"))
            }
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
