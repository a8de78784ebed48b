//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{
    CurrentConditions, DailyOutlook, ForecastQuery, ForecastReport, Humidity, Place,
};
use integration_weather::{
    Forecast, ForecastRequest, WeatherApiClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for the WeatherAPI.com forecast endpoint
pub struct WeatherAdapter {
    client: WeatherApiClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherApiClient")
            .field("base_url", &self.client.config().base_url)
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            WeatherApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    ///
    /// A body the provider could not fill in counts as an unknown place;
    /// everything that prevented an answer counts as a transport failure.
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::LocationNotFound(e) | WeatherError::ParseError(e) => {
                ApplicationError::LocationNotFound(e)
            },
            WeatherError::Unauthorized(e) => {
                ApplicationError::Transport(format!("authentication rejected: {e}"))
            },
            WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::ServiceUnavailable(_)
            | WeatherError::RateLimitExceeded => ApplicationError::Transport(err.to_string()),
        }
    }

    fn to_request(query: &ForecastQuery) -> ForecastRequest {
        ForecastRequest {
            query: query.term().as_str().to_string(),
            days: query.days(),
            air_quality: ForecastQuery::AIR_QUALITY,
            language: query.language().to_string(),
        }
    }

    /// Convert the integration forecast into the domain report
    fn map_forecast(forecast: Forecast) -> ForecastReport {
        ForecastReport {
            place: Place {
                name: forecast.location.name,
                region: forecast.location.region,
                country: forecast.location.country,
                local_time: forecast.location.local_time,
            },
            current: CurrentConditions {
                condition_text: forecast.current.condition_text,
                condition_code: forecast.current.condition_code,
                temperature_c: forecast.current.temperature_c,
                feels_like_c: forecast.current.feels_like_c,
                humidity: Humidity::clamped(forecast.current.humidity),
                wind_kph: forecast.current.wind_kph,
            },
            days: forecast
                .days
                .into_iter()
                .map(|d| DailyOutlook {
                    date: d.date,
                    max_temp_c: d.max_temp_c,
                    min_temp_c: d.min_temp_c,
                    chance_of_rain: d.chance_of_rain,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(q = %query.term()))]
    async fn fetch_forecast(
        &self,
        query: &ForecastQuery,
    ) -> Result<ForecastReport, ApplicationError> {
        let result = self
            .client
            .get_forecast(&Self::to_request(query))
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    place = %forecast.location.name,
                    temperature = forecast.current.temperature_c,
                    days = forecast.days.len(),
                    "Retrieved weather forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result.map(Self::map_forecast)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::QueryTerm;
    use integration_weather::{CurrentWeather, ForecastDay, Location};

    use super::*;

    fn adapter() -> WeatherAdapter {
        WeatherAdapter::with_config(WeatherConfig::with_api_key("k")).expect("adapter")
    }

    #[test]
    fn debug_impl_hides_key() {
        let debug_str = format!("{:?}", adapter());
        assert!(debug_str.contains("WeatherAdapter"));
        assert!(debug_str.contains("api.weatherapi.com"));
        assert!(!debug_str.contains("\"k\""));
    }

    #[test]
    fn request_carries_fixed_parameters() {
        let query = ForecastQuery::new(QueryTerm::new("Asan").expect("term"));
        let request = WeatherAdapter::to_request(&query);
        assert_eq!(request.query, "Asan");
        assert_eq!(request.days, 7);
        assert!(!request.air_quality);
        assert_eq!(request.language, "ko");
    }

    #[test]
    fn map_error_location_not_found() {
        let app_err = WeatherAdapter::map_error(WeatherError::LocationNotFound("1006".into()));
        assert!(matches!(app_err, ApplicationError::LocationNotFound(_)));
    }

    #[test]
    fn map_error_parse_error_is_location_not_found() {
        let app_err = WeatherAdapter::map_error(WeatherError::ParseError("no current".into()));
        assert!(matches!(app_err, ApplicationError::LocationNotFound(_)));
    }

    #[test]
    fn map_error_transport_variants() {
        for err in [
            WeatherError::ConnectionFailed("refused".into()),
            WeatherError::RequestFailed("HTTP 418".into()),
            WeatherError::ServiceUnavailable("HTTP 503".into()),
            WeatherError::RateLimitExceeded,
        ] {
            assert!(matches!(WeatherAdapter::map_error(err), ApplicationError::Transport(_)));
        }
    }

    #[test]
    fn map_error_unauthorized_mentions_authentication() {
        let app_err = WeatherAdapter::map_error(WeatherError::Unauthorized("HTTP 401".into()));
        assert!(matches!(app_err, ApplicationError::Transport(_)));
        assert!(app_err.to_string().contains("authentication"));
    }

    #[test]
    fn map_forecast_copies_fields() {
        let forecast = Forecast {
            location: Location {
                name: "Asan".into(),
                region: Some("Chungcheongnam-do".into()),
                country: "South Korea".into(),
                local_time: None,
            },
            current: CurrentWeather {
                condition_text: "맑음".into(),
                condition_code: Some(1000),
                temperature_c: 31.0,
                feels_like_c: Some(33.0),
                humidity: 70,
                wind_kph: 5.0,
            },
            days: vec![ForecastDay {
                date: NaiveDate::from_ymd_opt(2024, 7, 21).expect("date"),
                max_temp_c: 32.0,
                min_temp_c: 24.0,
                chance_of_rain: 40,
            }],
        };

        let report = WeatherAdapter::map_forecast(forecast);
        assert_eq!(report.place.display_name(), "Asan (South Korea)");
        assert_eq!(report.current.humidity.value(), 70);
        assert!(report.current.heat_level().is_hot());
        assert_eq!(report.days[0].chart_label(), "07-21");
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
