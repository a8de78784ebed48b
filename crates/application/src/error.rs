//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The provider could not place the query term
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The provider could not be reached or answered with a failure status
    #[error("Weather service unavailable: {0}")]
    Transport(String),

    /// Required configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
