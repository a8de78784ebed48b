//! Query terms and how they were resolved

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

/// A non-empty place identifier accepted by the weather provider
///
/// Either a place name (`"Asan"`, `"Gangneung"`) or a `"lat,lon"` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryTerm(String);

impl QueryTerm {
    /// Create a query term, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyQuery` if nothing remains after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build the `"lat,lon"` term for a coordinate
    #[must_use]
    pub fn from_location(location: &GeoLocation) -> Self {
        Self(location.to_query_string())
    }

    /// Get the term as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The outcome of resolving user input into a query term
///
/// Each branch is a named variant so that callers and tests can tell an
/// alias hit apart from a verbatim pass-through.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Typed text matched the alias table
    Alias {
        /// The trimmed text the user typed
        input: String,
        /// The mapped provider term
        term: QueryTerm,
    },
    /// Typed text had no alias and is forwarded unchanged
    PassThrough {
        /// The trimmed text, used verbatim
        term: QueryTerm,
    },
    /// No text was typed; the geolocation fix is used
    Coordinates {
        /// The reported position
        location: GeoLocation,
        /// `"lat,lon"` rendering of the position
        term: QueryTerm,
    },
}

impl Resolution {
    /// The term to send to the provider
    #[must_use]
    pub const fn term(&self) -> &QueryTerm {
        match self {
            Self::Alias { term, .. } | Self::PassThrough { term } | Self::Coordinates { term, .. } => {
                term
            },
        }
    }

    /// Consume and return the term
    #[must_use]
    pub fn into_term(self) -> QueryTerm {
        match self {
            Self::Alias { term, .. } | Self::PassThrough { term } | Self::Coordinates { term, .. } => {
                term
            },
        }
    }

    /// What the user originally asked for, for display
    #[must_use]
    pub fn input_label(&self) -> String {
        match self {
            Self::Alias { input, .. } => input.clone(),
            Self::PassThrough { term } => term.to_string(),
            Self::Coordinates { location, .. } => location.to_string(),
        }
    }

    /// Whether the alias table supplied the term
    #[must_use]
    pub const fn is_alias(&self) -> bool {
        matches!(self, Self::Alias { .. })
    }

    /// Whether the typed text was forwarded unchanged
    #[must_use]
    pub const fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough { .. })
    }

    /// Whether the term came from a coordinate
    #[must_use]
    pub const fn is_coordinates(&self) -> bool {
        matches!(self, Self::Coordinates { .. })
    }
}
