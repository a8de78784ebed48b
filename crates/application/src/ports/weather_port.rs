//! Weather service port
//!
//! Defines the interface for forecast retrieval.

use async_trait::async_trait;
use domain::{ForecastQuery, ForecastReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions and the daily outlook in one request
    ///
    /// Implementations make exactly one attempt. An unknown or unparseable
    /// place yields `ApplicationError::LocationNotFound`; network failures
    /// and failure statuses yield `ApplicationError::Transport`.
    async fn fetch_forecast(
        &self,
        query: &ForecastQuery,
    ) -> Result<ForecastReport, ApplicationError>;

    /// Check if the weather provider is reachable and accepts our key
    async fn is_available(&self) -> bool;
}
