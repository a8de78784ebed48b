//! Domain layer for Korea Weather Hub
//!
//! Contains the city alias table, query resolution value objects, and the
//! normalized forecast report. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
