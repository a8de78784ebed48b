//! HTML dashboard handler

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
};
use tracing::instrument;

use super::common::LocationParams;
use crate::{error::ApiError, state::AppState, view};

/// Render the dashboard for the given city or position
#[instrument(skip(state, query))]
pub async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<LocationParams>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let params = LocationParams::from_query(query)?;
    let outcome = state.dashboard.lookup(params.to_input()).await;

    let page = view::dashboard_view(params.query_text(), &outcome, params.is_empty());
    Ok(Html(state.templates.render_dashboard(&page)?))
}
