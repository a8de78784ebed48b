//! JSON forecast handler

use application::DashboardOutcome;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use domain::{ForecastReport, Resolution};
use serde::Serialize;
use tracing::instrument;

use super::common::LocationParams;
use crate::{error::ApiError, state::AppState, view};

/// Forecast lookup response
#[derive(Debug, Clone, Serialize)]
pub struct ForecastResponse {
    /// `idle`, `found`, `location_not_found` or `transport_failure`
    pub status: &'static str,
    /// Korean message shown to the user; `null` when a report is returned
    pub message: Option<&'static str>,
    /// The term that could not be placed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// How the input became a provider term
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
    /// The forecast, for `found` only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ForecastReport>,
    /// Heat banner flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot: Option<bool>,
    /// Background image for the reported condition
    pub background_url: &'static str,
}

impl ForecastResponse {
    /// HTTP status for an outcome
    #[must_use]
    pub const fn status_code(outcome: &DashboardOutcome) -> StatusCode {
        match outcome {
            DashboardOutcome::Idle | DashboardOutcome::Found { .. } => StatusCode::OK,
            DashboardOutcome::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            DashboardOutcome::TransportFailure { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<DashboardOutcome> for ForecastResponse {
    fn from(outcome: DashboardOutcome) -> Self {
        let status = outcome.status();
        let message = outcome.message();
        let background_url = view::outcome_background(&outcome);

        let mut response = Self {
            status,
            message,
            query: None,
            resolution: None,
            report: None,
            hot: None,
            background_url,
        };

        match outcome {
            DashboardOutcome::Found { resolution, report } => {
                response.hot = Some(report.current.heat_level().is_hot());
                response.resolution = Some(resolution);
                response.report = Some(report);
            },
            DashboardOutcome::LocationNotFound { query } => response.query = Some(query),
            DashboardOutcome::Idle | DashboardOutcome::TransportFailure { .. } => {},
        }

        response
    }
}

/// Look up the forecast for a city or position
#[instrument(skip(state, query))]
pub async fn forecast(
    State(state): State<AppState>,
    query: Result<Query<LocationParams>, QueryRejection>,
) -> Result<(StatusCode, Json<ForecastResponse>), ApiError> {
    let params = LocationParams::from_query(query)?;
    let outcome = state.dashboard.lookup(params.to_input()).await;

    let status = ForecastResponse::status_code(&outcome);
    Ok((status, Json(ForecastResponse::from(outcome))))
}
