use thiserror::Error;

use crate::domain::query::QueryConstraintError;

/// Failures a service call reports to the route layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(#[from] QueryConstraintError),

    /// The record source could not be read or parsed.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
