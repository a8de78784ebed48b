//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A query term was empty after trimming
    #[error("Query term must not be empty")]
    EmptyQuery,
}
