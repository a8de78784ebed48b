//! Location resolution
//!
//! Turns what the user supplied (typed text, a geolocation fix, or nothing)
//! into the query term the weather provider understands.

use domain::{CityAliasTable, GeoLocation, QueryTerm, Resolution};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Raw input for one dashboard interaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    /// Text typed by the user, possibly empty
    pub text: Option<String>,
    /// Fix from the geolocation collaborator, if permission was granted
    pub location: Option<GeoLocation>,
}

impl LocationInput {
    /// Input consisting of typed text only
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            location: None,
        }
    }

    /// Input consisting of a geolocation fix only
    #[must_use]
    pub const fn coordinates(location: GeoLocation) -> Self {
        Self {
            text: None,
            location: Some(location),
        }
    }

    /// Add a geolocation fix
    #[must_use]
    pub const fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Typed text after trimming, `None` when blank
    #[must_use]
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Resolves dashboard input against the city alias table
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver {
    aliases: &'static CityAliasTable,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver {
    /// Resolver backed by the built-in Korean city table
    #[must_use]
    pub fn new() -> Self {
        Self::with_aliases(CityAliasTable::korean())
    }

    /// Resolver backed by a custom table
    #[must_use]
    pub const fn with_aliases(aliases: &'static CityAliasTable) -> Self {
        Self { aliases }
    }

    /// The table this resolver consults
    #[must_use]
    pub const fn aliases(&self) -> &'static CityAliasTable {
        self.aliases
    }

    /// Resolve input into a query term
    ///
    /// Typed text takes priority over geolocation; geolocation is only used
    /// when the text is blank. Returns `None` when neither is available,
    /// which is the idle state rather than an error.
    pub fn resolve(&self, input: &LocationInput) -> Option<Resolution> {
        if let Some(resolution) = input.trimmed_text().and_then(|t| self.resolve_text(t)) {
            return Some(resolution);
        }

        let location = input.location?;
        if !location.is_within_bounds() {
            warn!(%location, "Coordinates out of range, forwarding to provider anyway");
        }
        debug!(%location, "Resolving from geolocation");
        Some(Resolution::Coordinates {
            location,
            term: QueryTerm::from_location(&location),
        })
    }

    fn resolve_text(&self, text: &str) -> Option<Resolution> {
        let typed = QueryTerm::new(text).ok()?;
        let resolution = match self.aliases.lookup(typed.as_str()) {
            Some(mapped) => {
                debug!(input = %typed, term = mapped, "Resolved city alias");
                Resolution::Alias {
                    input: typed.to_string(),
                    term: QueryTerm::new(mapped).ok()?,
                }
            },
            None => {
                debug!(input = %typed, "No alias, passing name through");
                Resolution::PassThrough { term: typed }
            },
        };
        Some(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LocationResolver {
        LocationResolver::new()
    }

    #[test]
    fn known_city_resolves_to_alias() {
        let resolution = resolver()
            .resolve(&LocationInput::text("아산"))
            .expect("resolves");
        assert!(resolution.is_alias());
        assert_eq!(resolution.term().as_str(), "Asan");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let resolution = resolver()
            .resolve(&LocationInput::text("  제주 \n"))
            .expect("resolves");
        assert_eq!(resolution.term().as_str(), "Jeju");
    }

    #[test]
    fn unknown_name_passes_through() {
        let resolution = resolver()
            .resolve(&LocationInput::text("강릉"))
            .expect("resolves");
        assert!(resolution.is_pass_through());
        assert_eq!(resolution.term().as_str(), "강릉");
    }

    #[test]
    fn english_name_passes_through() {
        let resolution = resolver()
            .resolve(&LocationInput::text("Tokyo"))
            .expect("resolves");
        assert!(resolution.is_pass_through());
        assert_eq!(resolution.term().as_str(), "Tokyo");
    }

    #[test]
    fn text_beats_coordinates() {
        let input = LocationInput::text("부산").with_location(GeoLocation::new(37.5665, 126.978));
        let resolution = resolver().resolve(&input).expect("resolves");
        assert!(resolution.is_alias());
        assert_eq!(resolution.term().as_str(), "Busan");
    }

    #[test]
    fn coordinates_used_when_text_blank() {
        let input = LocationInput::text("   ").with_location(GeoLocation::new(37.5665, 126.9780));
        let resolution = resolver().resolve(&input).expect("resolves");
        assert!(resolution.is_coordinates());
        assert_eq!(resolution.term().as_str(), "37.5665,126.978");
    }

    #[test]
    fn coordinates_only_input() {
        let input = LocationInput::coordinates(GeoLocation::new(35.1796, 129.0756));
        let resolution = resolver().resolve(&input).expect("resolves");
        assert_eq!(resolution.term().as_str(), "35.1796,129.0756");
    }

    #[test]
    fn out_of_range_coordinates_are_forwarded() {
        let input = LocationInput::coordinates(GeoLocation::new(200.0, 500.0));
        let resolution = resolver().resolve(&input).expect("resolves");
        assert_eq!(resolution.term().as_str(), "200,500");
    }

    #[test]
    fn nothing_supplied_is_idle() {
        assert!(resolver().resolve(&LocationInput::default()).is_none());
        assert!(resolver().resolve(&LocationInput::text("")).is_none());
        assert!(resolver().resolve(&LocationInput::text(" \t ")).is_none());
    }

    #[test]
    fn custom_table() {
        static TABLE: std::sync::LazyLock<CityAliasTable> =
            std::sync::LazyLock::new(|| CityAliasTable::from_entries(&[("강릉", "Gangneung")]));
        let resolver = LocationResolver::with_aliases(&TABLE);
        let resolution = resolver
            .resolve(&LocationInput::text("강릉"))
            .expect("resolves");
        assert!(resolution.is_alias());
        assert_eq!(resolution.term().as_str(), "Gangneung");
        assert_eq!(resolver.aliases().len(), 1);
    }
}
