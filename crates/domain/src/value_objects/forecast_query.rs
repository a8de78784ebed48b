//! Forecast request parameters

use serde::Serialize;

use super::QueryTerm;

/// A fully specified forecast request
///
/// Only the place varies between requests; the horizon, air-quality flag and
/// response language are fixed for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastQuery {
    term: QueryTerm,
}

impl ForecastQuery {
    /// Number of forecast days requested
    pub const FORECAST_DAYS: u8 = 7;

    /// Whether air-quality data is requested
    pub const AIR_QUALITY: bool = false;

    /// Response language (condition texts come back in Korean)
    pub const LANGUAGE: &'static str = "ko";

    /// Create a query for the given place
    #[must_use]
    pub const fn new(term: QueryTerm) -> Self {
        Self { term }
    }

    /// The place to look up
    #[must_use]
    pub const fn term(&self) -> &QueryTerm {
        &self.term
    }

    /// Forecast horizon in days
    #[must_use]
    pub const fn days(&self) -> u8 {
        Self::FORECAST_DAYS
    }

    /// Provider flag value for air quality (`"yes"` / `"no"`)
    #[must_use]
    pub const fn air_quality_flag(&self) -> &'static str {
        if Self::AIR_QUALITY { "yes" } else { "no" }
    }

    /// Provider language code
    #[must_use]
    pub const fn language(&self) -> &'static str {
        Self::LANGUAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_parameters() {
        let query = ForecastQuery::new(QueryTerm::new("Asan").expect("valid"));
        assert_eq!(query.term().as_str(), "Asan");
        assert_eq!(query.days(), 7);
        assert_eq!(query.air_quality_flag(), "no");
        assert_eq!(query.language(), "ko");
    }
}
