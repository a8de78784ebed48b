//! Application layer - Use cases and orchestration
//!
//! Resolves user input into provider query terms, drives the forecast port,
//! and folds every result into a displayable outcome.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
