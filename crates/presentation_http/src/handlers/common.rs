//! Query parameters shared by the dashboard and forecast handlers

use application::LocationInput;
use axum::extract::{Query, rejection::QueryRejection};
use domain::GeoLocation;
use serde::Deserialize;

use crate::error::ApiError;

/// `?q=아산` or `?lat=37.5&lon=127.0`; all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationParams {
    /// City name as typed
    pub q: Option<String>,
    /// Latitude from the browser
    pub lat: Option<f64>,
    /// Longitude from the browser
    pub lon: Option<f64>,
}

impl LocationParams {
    /// Unwrap the extractor result, turning bad numbers into a 400
    pub fn from_query(
        query: Result<Query<Self>, QueryRejection>,
    ) -> Result<Self, ApiError> {
        query
            .map(|Query(params)| params)
            .map_err(|e| ApiError::BadRequest(e.body_text()))
    }

    /// Coordinates, when both halves were sent
    #[must_use]
    pub fn location(&self) -> Option<GeoLocation> {
        self.lat
            .zip(self.lon)
            .map(|(lat, lon)| GeoLocation::new(lat, lon))
    }

    /// Whether the request carried nothing to look up
    ///
    /// The page only prompts for the browser position in this case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.lat.is_none() && self.lon.is_none()
    }

    /// Text to echo back into the search box
    #[must_use]
    pub fn query_text(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// Convert into resolver input
    #[must_use]
    pub fn to_input(&self) -> LocationInput {
        LocationInput {
            text: self.q.clone(),
            location: self.location(),
        }
    }
}
