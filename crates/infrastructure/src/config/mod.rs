//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: WeatherAPI.com endpoint and key
//!
//! Telemetry settings reuse [`crate::telemetry::TelemetryConfig`].

mod server;
mod weather;

use std::path::Path;

use application::ApplicationError;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::telemetry::TelemetryConfig;

pub use server::ServerConfig;
pub use weather::WeatherAppConfig;

/// Prefix for environment overrides (`WEATHER_HUB_SERVER__PORT`)
pub const ENV_PREFIX: &str = "WEATHER_HUB";

/// Environment variable consulted when no key is configured otherwise
pub const LEGACY_API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the environment
    ///
    /// Sources in increasing priority: defaults, `config.toml` in the working
    /// directory, `WEATHER_HUB_*` variables, and finally `WEATHER_API_KEY`
    /// when no key was set by the other sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::builder()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(Self::environment());
        Self::finish(builder)
    }

    /// Load configuration from an explicit file path plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or a source cannot be parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        let builder = Self::builder()?
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment());
        Self::finish(builder)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8501)?
            .set_default("weather.base_url", "https://api.weatherapi.com/v1")
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_fallback_key(std::env::var(LEGACY_API_KEY_VAR).ok());
        debug!(config = ?config, "Configuration loaded");
        Ok(config)
    }

    /// Use `key` as the API key when none is configured
    ///
    /// Returns `true` if the fallback was applied.
    pub fn apply_fallback_key(&mut self, key: Option<String>) -> bool {
        if self.weather.api_key().is_some() {
            return false;
        }
        match key.filter(|k| !k.trim().is_empty()) {
            Some(key) => {
                info!(var = LEGACY_API_KEY_VAR, "Using API key from fallback variable");
                self.weather.api_key = Some(SecretString::from(key));
                true
            },
            None => false,
        }
    }

    /// The configured API key
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when the key is absent or
    /// blank; callers treat this as fatal before serving any request.
    pub fn require_api_key(&self) -> Result<&str, ApplicationError> {
        self.weather.api_key().ok_or_else(|| {
            ApplicationError::Configuration(format!(
                "weather API key is not set; provide {ENV_PREFIX}_WEATHER__API_KEY, \
                 {LEGACY_API_KEY_VAR}, or weather.api_key in config.toml"
            ))
        })
    }

    /// Client configuration for the weather provider
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when the key is missing.
    pub fn weather_client_config(
        &self,
    ) -> Result<integration_weather::WeatherConfig, ApplicationError> {
        let key = self.require_api_key()?;
        Ok(self.weather.to_client_config(key))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_with_key(key: Option<&str>) -> AppConfig {
        let mut config = AppConfig::default();
        config.weather.api_key = key.map(|k| SecretString::from(k.to_string()));
        config
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8501");
        assert_eq!(config.server.shutdown_timeout_secs, Some(30));
        assert!(!config.server.json_logs());
        assert_eq!(config.weather.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.weather.api_key.is_none());
        assert!(!config.telemetry.enabled);
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let err = config_with_key(None).require_api_key().expect_err("no key");
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert!(err.to_string().contains(LEGACY_API_KEY_VAR));
    }

    #[test]
    fn blank_key_is_configuration_error() {
        assert!(config_with_key(Some("   ")).require_api_key().is_err());
    }

    #[test]
    fn present_key_is_returned_trimmed() {
        let config = config_with_key(Some(" abc123 "));
        assert_eq!(config.require_api_key().expect("key"), "abc123");

        let client = config.weather_client_config().expect("client config");
        assert_eq!(client.api_key, "abc123");
        assert_eq!(client.base_url, "https://api.weatherapi.com/v1");
    }

    #[test]
    fn fallback_key_only_fills_gaps() {
        let mut config = config_with_key(Some("primary"));
        assert!(!config.apply_fallback_key(Some("legacy".into())));
        assert_eq!(config.require_api_key().expect("key"), "primary");

        let mut config = config_with_key(None);
        assert!(!config.apply_fallback_key(Some("  ".into())));
        assert!(!config.apply_fallback_key(None));
        assert!(config.apply_fallback_key(Some("legacy".into())));
        assert_eq!(config.require_api_key().expect("key"), "legacy");
    }

    #[test]
    fn api_key_is_redacted_and_never_serialized() {
        let config = config_with_key(Some("very-secret"));
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[REDACTED]"));

        let json = serde_json::to_string(&config).expect("serialize");
        assert!(!json.contains("very-secret"));
    }

    #[test]
    fn loads_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            r#"
[server]
port = 9000
log_format = "json"

[weather]
base_url = "http://localhost:1234/v1"
timeout_secs = 3
api_key = "from-file"
"#
        )
        .expect("write");

        let config = AppConfig::load_from_file(file.path()).expect("load");
        assert_eq!(config.server.port, 9000);
        assert!(config.server.json_logs());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.weather.base_url, "http://localhost:1234/v1");
        assert_eq!(config.weather.timeout_secs, 3);
        assert!(config.require_api_key().is_ok());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(AppConfig::load_from_file(dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[server]\nport = \"not a port\"").expect("write");

        assert!(AppConfig::load_from_file(file.path()).is_err());
    }
}
