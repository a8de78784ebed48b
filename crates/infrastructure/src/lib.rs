//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and hosts the ambient
//! concerns shared by the binaries: configuration, telemetry, and templates.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, ServerConfig, WeatherAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
pub use templates::{DashboardView, ForecastView, TemplateEngine, TemplateError};
