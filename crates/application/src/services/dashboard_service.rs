//! Dashboard lookup service
//!
//! One interaction of the weather dashboard: resolve the input, fetch the
//! forecast once, and report which of the four screens to show.

use std::sync::Arc;

use domain::{ForecastQuery, ForecastReport, Resolution};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::location_resolver::{LocationInput, LocationResolver};
use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Prompt shown when neither a city nor a position is available
pub const IDLE_MESSAGE: &str = "도시 이름을 입력하거나 GPS를 허용해 주세요.";

/// Message shown when the provider does not know the place
pub const NOT_FOUND_MESSAGE: &str = "지역을 찾을 수 없습니다.";

/// Message shown when the provider could not be reached
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "날씨 서비스에 연결할 수 없습니다. 잠시 후 다시 시도해 주세요.";

/// Result of one dashboard lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardOutcome {
    /// No text and no position; nothing was fetched
    Idle,
    /// The provider returned a usable report
    Found {
        /// How the input was turned into a query term
        resolution: Resolution,
        /// The normalized forecast
        report: ForecastReport,
    },
    /// The provider could not place the query
    LocationNotFound {
        /// The term that was sent
        query: String,
    },
    /// The provider was unreachable or refused the request
    TransportFailure {
        /// Operator-facing detail, not shown verbatim to end users
        message: String,
    },
}

impl DashboardOutcome {
    /// User-facing message for the non-data screens
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle => Some(IDLE_MESSAGE),
            Self::Found { .. } => None,
            Self::LocationNotFound { .. } => Some(NOT_FOUND_MESSAGE),
            Self::TransportFailure { .. } => Some(TRANSPORT_FAILURE_MESSAGE),
        }
    }

    /// Stable status label
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Found { .. } => "found",
            Self::LocationNotFound { .. } => "location_not_found",
            Self::TransportFailure { .. } => "transport_failure",
        }
    }

    /// The report, when one was found
    #[must_use]
    pub const fn report(&self) -> Option<&ForecastReport> {
        match self {
            Self::Found { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Whether a report was found
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Drives the resolve-then-fetch flow behind the dashboard
pub struct DashboardService {
    weather: Arc<dyn WeatherPort>,
    resolver: LocationResolver,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("weather", &"<WeatherPort>")
            .field("resolver", &self.resolver)
            .finish()
    }
}

impl DashboardService {
    /// Create a service using the built-in city table
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self::with_resolver(weather, LocationResolver::new())
    }

    /// Create a service with a custom resolver
    #[must_use]
    pub fn with_resolver(weather: Arc<dyn WeatherPort>, resolver: LocationResolver) -> Self {
        Self { weather, resolver }
    }

    /// The resolver in use
    #[must_use]
    pub const fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    /// Run one lookup
    ///
    /// Never fails: every error is folded into an outcome the dashboard can
    /// render. The provider is called at most once.
    #[instrument(skip(self), fields(has_text = input.trimmed_text().is_some(), has_location = input.location.is_some()))]
    pub async fn lookup(&self, input: LocationInput) -> DashboardOutcome {
        let Some(resolution) = self.resolver.resolve(&input) else {
            return DashboardOutcome::Idle;
        };

        let query = ForecastQuery::new(resolution.term().clone());
        match self.weather.fetch_forecast(&query).await {
            Ok(report) => {
                info!(
                    term = %query.term(),
                    place = %report.place.name,
                    days = report.days.len(),
                    "Forecast found"
                );
                DashboardOutcome::Found { resolution, report }
            },
            Err(e) => Self::outcome_for_error(query.term().as_str(), e),
        }
    }

    /// Whether the provider currently answers
    pub async fn is_provider_available(&self) -> bool {
        self.weather.is_available().await
    }

    fn outcome_for_error(term: &str, error: ApplicationError) -> DashboardOutcome {
        match error {
            ApplicationError::LocationNotFound(_) | ApplicationError::Domain(_) => {
                info!(term, error = %error, "Location not found");
                DashboardOutcome::LocationNotFound {
                    query: term.to_string(),
                }
            },
            ApplicationError::Transport(_)
            | ApplicationError::Configuration(_)
            | ApplicationError::Internal(_) => {
                warn!(term, error = %error, "Forecast lookup failed");
                DashboardOutcome::TransportFailure {
                    message: error.to_string(),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::{CurrentConditions, DailyOutlook, GeoLocation, Humidity, Place};
    use mockall::predicate::function;

    use super::*;
    use crate::ports::MockWeatherPort;

    fn report_for(name: &str, temp: f64) -> ForecastReport {
        let first = NaiveDate::from_ymd_opt(2024, 7, 21).expect("valid date");
        ForecastReport {
            place: Place {
                name: name.to_string(),
                region: None,
                country: "South Korea".to_string(),
                local_time: None,
            },
            current: CurrentConditions {
                condition_text: "맑음".to_string(),
                condition_code: Some(1000),
                temperature_c: temp,
                feels_like_c: None,
                humidity: Humidity::clamped(55),
                wind_kph: 9.0,
            },
            days: (0..7u8)
                .map(|i| DailyOutlook {
                    date: first + chrono::Days::new(u64::from(i)),
                    max_temp_c: 30.0 + f64::from(i),
                    min_temp_c: 22.0,
                    chance_of_rain: i * 10,
                })
                .collect(),
        }
    }

    fn service(mock: MockWeatherPort) -> DashboardService {
        DashboardService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn alias_lookup_finds_report() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_forecast()
            .with(function(|q: &ForecastQuery| q.term().as_str() == "Asan"))
            .times(1)
            .returning(|_| Ok(report_for("Asan", 31.0)));

        let outcome = service(mock).lookup(LocationInput::text("아산")).await;

        let DashboardOutcome::Found { resolution, report } = outcome else {
            panic!("expected found outcome");
        };
        assert!(resolution.is_alias());
        assert_eq!(report.place.display_name(), "Asan (South Korea)");
        assert!(report.current.heat_level().is_hot());
        assert_eq!(report.days.len(), 7);
    }

    #[tokio::test]
    async fn coordinates_are_sent_as_lat_lon() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_forecast()
            .with(function(|q: &ForecastQuery| {
                q.term().as_str() == "37.5665,126.978" && q.days() == 7 && q.language() == "ko"
            }))
            .times(1)
            .returning(|_| Ok(report_for("Seoul", 20.0)));

        let outcome = service(mock)
            .lookup(LocationInput::coordinates(GeoLocation::new(37.5665, 126.978)))
            .await;
        assert!(outcome.is_found());
        assert!(outcome.message().is_none());
    }

    #[tokio::test]
    async fn idle_makes_no_request() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_forecast().never();

        let outcome = service(mock).lookup(LocationInput::default()).await;
        assert_eq!(outcome, DashboardOutcome::Idle);
        assert_eq!(outcome.message(), Some(IDLE_MESSAGE));
        assert_eq!(outcome.status(), "idle");
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_forecast()
            .times(1)
            .returning(|_| Err(ApplicationError::LocationNotFound("No matching location found.".into())));

        let outcome = service(mock).lookup(LocationInput::text("없는도시")).await;
        assert_eq!(
            outcome,
            DashboardOutcome::LocationNotFound {
                query: "없는도시".to_string()
            }
        );
        assert_eq!(outcome.message(), Some(NOT_FOUND_MESSAGE));
        assert!(outcome.report().is_none());
    }

    #[tokio::test]
    async fn transport_error_is_distinct_from_not_found() {
        let mut mock = MockWeatherPort::new();
        mock.expect_fetch_forecast()
            .times(1)
            .returning(|_| Err(ApplicationError::Transport("connection refused".into())));

        let outcome = service(mock).lookup(LocationInput::text("서울")).await;
        assert_eq!(outcome.status(), "transport_failure");
        assert_eq!(outcome.message(), Some(TRANSPORT_FAILURE_MESSAGE));
        let DashboardOutcome::TransportFailure { message } = outcome else {
            panic!("expected transport failure");
        };
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn provider_availability_is_forwarded() {
        let mut mock = MockWeatherPort::new();
        mock.expect_is_available().times(1).returning(|| false);
        assert!(!service(mock).is_provider_available().await);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(DashboardOutcome::LocationNotFound {
            query: "Atlantis".into(),
        })
        .expect("serialize");
        assert_eq!(json["status"], "location_not_found");
        assert_eq!(json["query"], "Atlantis");
    }

    #[test]
    fn debug_hides_port() {
        let svc = service(MockWeatherPort::new());
        assert!(format!("{svc:?}").contains("<WeatherPort>"));
    }
}
