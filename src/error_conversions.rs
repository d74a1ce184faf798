//! Error conversion glue between the repository and service layers.
//!
//! The repository must not depend on service error types, so the mapping
//! from storage failures to client-visible conditions lives here.

use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<RepositoryError> for ServiceError {
    /// Every dataset failure is an environment fault, not a request fault.
    fn from(val: RepositoryError) -> Self {
        ServiceError::Unavailable(val.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(val: serde_json::Error) -> Self {
        ServiceError::Internal(format!("Failed to encode response: {val}"))
    }
}
