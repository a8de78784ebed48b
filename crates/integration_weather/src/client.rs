//! WeatherAPI.com client
//!
//! HTTP client for the `forecast.json` endpoint.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{ApiErrorBody, ApiResponse, Forecast, NO_MATCHING_LOCATION};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed (DNS, refused, timeout)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The API key was missing, invalid, or disabled
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The provider could not match the query to a place
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherConfig {
    /// Configuration with the given key and default endpoint
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// Parameters of one forecast request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    /// Place name or `"lat,lon"`
    pub query: String,
    /// Number of forecast days
    pub days: u8,
    /// Whether to include air quality data
    pub air_quality: bool,
    /// Response language code
    pub language: String,
}

impl ForecastRequest {
    /// Request with the dashboard defaults: 7 days, no air quality, Korean
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            days: 7,
            air_quality: false,
            language: "ko".to_string(),
        }
    }

    const fn aqi_param(&self) -> &'static str {
        if self.air_quality { "yes" } else { "no" }
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions and the daily outlook in one request
    async fn get_forecast(&self, request: &ForecastRequest) -> Result<Forecast, WeatherError>;

    /// Check if the weather service answers with the configured key
    async fn is_healthy(&self) -> bool;
}

/// WeatherAPI.com HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast.json", self.config.base_url.trim_end_matches('/'))
    }

    fn map_send_error(e: &reqwest::Error) -> WeatherError {
        if e.is_connect() || e.is_timeout() {
            WeatherError::ConnectionFailed(e.to_string())
        } else {
            WeatherError::RequestFailed(e.to_string())
        }
    }

    /// Turn a failure status into the matching error
    async fn error_for_status(response: Response) -> WeatherError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorBody>(&body).ok().map(|b| b.error);
        let message = detail
            .as_ref()
            .map_or_else(|| format!("HTTP {status}"), |d| format!("HTTP {status}: {}", d.message));

        match status {
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => WeatherError::Unauthorized(message),
            StatusCode::BAD_REQUEST
                if detail.as_ref().is_some_and(|d| d.code == NO_MATCHING_LOCATION) =>
            {
                WeatherError::LocationNotFound(message)
            },
            s if s.is_server_error() => WeatherError::ServiceUnavailable(message),
            _ => WeatherError::RequestFailed(message),
        }
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    #[instrument(skip(self), fields(q = %request.query, days = request.days))]
    async fn get_forecast(&self, request: &ForecastRequest) -> Result<Forecast, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, lang = %request.language, "Fetching weather forecast");

        let days = request.days.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", request.query.as_str()),
                ("days", days.as_str()),
                ("aqi", request.aqi_param()),
                ("lang", request.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        if !response.status().is_success() {
            let error = Self::error_for_status(response).await;
            warn!(error = %error, "Weather request rejected");
            return Err(error);
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;
        let api_response: ApiResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        api_response.into_forecast()
    }

    async fn is_healthy(&self) -> bool {
        let mut probe = ForecastRequest::new("Seoul");
        probe.days = 1;
        self.get_forecast(&probe).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = WeatherConfig::with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_config_never_serializes_key() {
        let config = WeatherConfig::with_api_key("super-secret");
        let json = serde_json::to_string(&config).expect("should serialize");
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn test_config_deserializes_key() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"api_key": "abc", "timeout_secs": 3}"#)
                .expect("should deserialize");
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.base_url, "https://api.weatherapi.com/v1");
    }

    #[test]
    fn test_request_defaults() {
        let request = ForecastRequest::new("Asan");
        assert_eq!(request.days, 7);
        assert_eq!(request.aqi_param(), "no");
        assert_eq!(request.language, "ko");
    }

    #[test]
    fn test_forecast_url_tolerates_trailing_slash() {
        let client = WeatherApiClient::new(WeatherConfig {
            base_url: "http://localhost:9999/v1/".to_string(),
            ..WeatherConfig::default()
        })
        .expect("client creation should succeed");
        assert_eq!(client.forecast_url(), "http://localhost:9999/v1/forecast.json");
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));

        let err = WeatherError::LocationNotFound("HTTP 400".into());
        assert_eq!(err.to_string(), "Location not found: HTTP 400");
    }

    #[test]
    fn test_client_creation() {
        assert!(WeatherApiClient::with_defaults().is_ok());
    }
}
