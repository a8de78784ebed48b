//! One-shot forecast lookup
//!
//! Runs the same resolve-then-fetch flow as the dashboard and renders the
//! outcome as a text report.

use std::sync::Arc;

use application::{DashboardOutcome, DashboardService, LocationInput, WeatherPort};
use domain::GeoLocation;
use infrastructure::{AppConfig, ForecastView, TemplateEngine, TemplateError, WeatherAdapter};

/// Exit code when nothing was given to look up
pub const EXIT_IDLE: i32 = 2;
/// Exit code for an unknown place or an unreachable provider
pub const EXIT_FAILURE: i32 = 1;

/// Build resolver input from the command line
///
/// Coordinates count only when both halves are given.
#[must_use]
pub fn location_input(city: Option<String>, lat: Option<f64>, lon: Option<f64>) -> LocationInput {
    LocationInput {
        text: city,
        location: lat.zip(lon).map(|(lat, lon)| GeoLocation::new(lat, lon)),
    }
}

/// Process exit code for an outcome
#[must_use]
pub const fn exit_code(outcome: &DashboardOutcome) -> i32 {
    match outcome {
        DashboardOutcome::Found { .. } => 0,
        DashboardOutcome::Idle => EXIT_IDLE,
        DashboardOutcome::LocationNotFound { .. } | DashboardOutcome::TransportFailure { .. } => {
            EXIT_FAILURE
        },
    }
}

/// Render an outcome for the terminal
///
/// # Errors
///
/// Returns an error if the report template fails to render.
pub fn render_outcome(
    templates: &TemplateEngine,
    outcome: &DashboardOutcome,
) -> Result<String, TemplateError> {
    match outcome {
        DashboardOutcome::Found { resolution, report } => {
            let body = templates.render_report(&ForecastView::from_report(report))?;
            Ok(format!(
                "🔎 {} → {}\n\n{body}",
                resolution.input_label(),
                resolution.term()
            ))
        },
        DashboardOutcome::LocationNotFound { query } => Ok(format!(
            "❌ {} ({query})",
            outcome.message().unwrap_or_default()
        )),
        DashboardOutcome::Idle | DashboardOutcome::TransportFailure { .. } => {
            Ok(outcome.message().unwrap_or_default().to_string())
        },
    }
}

/// Build the dashboard service from configuration
///
/// # Errors
///
/// Returns an error if the API key is missing or the client cannot be built.
pub fn service_from_config(config: &AppConfig) -> anyhow::Result<DashboardService> {
    let adapter = WeatherAdapter::with_config(config.weather_client_config()?)?;
    let weather: Arc<dyn WeatherPort> = Arc::new(adapter);
    Ok(DashboardService::new(weather))
}

/// Look up once and return the rendered text with its exit code
///
/// # Errors
///
/// Returns an error if rendering fails.
pub async fn run(
    service: &DashboardService,
    templates: &TemplateEngine,
    input: LocationInput,
) -> anyhow::Result<(String, i32)> {
    let outcome = service.lookup(input).await;
    if let DashboardOutcome::TransportFailure { message } = &outcome {
        tracing::warn!(detail = %message, "Weather provider unreachable");
    }
    let text = render_outcome(templates, &outcome)?;
    Ok((text, exit_code(&outcome)))
}
