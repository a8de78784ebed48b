//! Application services - Use case implementations

mod dashboard_service;
mod location_resolver;

pub use dashboard_service::{
    DashboardOutcome, DashboardService, IDLE_MESSAGE, NOT_FOUND_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};
pub use location_resolver::{LocationInput, LocationResolver};
