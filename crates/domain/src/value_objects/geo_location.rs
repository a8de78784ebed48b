//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair as reported by a geolocation source
///
/// Coordinates are carried through unvalidated: the weather provider is the
/// authority on what it accepts. Use [`GeoLocation::is_within_bounds`] when a
/// caller wants to flag suspicious input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees
    latitude: f64,
    /// Longitude in degrees
    longitude: f64,
}

impl GeoLocation {
    /// Create a new location
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Render as a provider query term: `"<lat>,<lon>"`
    ///
    /// Uses the shortest representation that round-trips to the same `f64`,
    /// so no precision is lost and no trailing zeros are added.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Seoul City Hall
    #[must_use]
    pub const fn seoul() -> Self {
        Self::new(37.5665, 126.978)
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
