//! City alias listing

use axum::{Json, extract::State};
use domain::CityAlias;
use serde::Serialize;

use crate::state::AppState;

/// Alias table response
#[derive(Debug, Clone, Serialize)]
pub struct CitiesResponse {
    pub count: usize,
    pub cities: Vec<CityAlias>,
}

/// List the Korean names the dashboard understands
pub async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities: Vec<CityAlias> = state
        .dashboard
        .resolver()
        .aliases()
        .entries()
        .copied()
        .collect();

    Json(CitiesResponse {
        count: cities.len(),
        cities,
    })
}
