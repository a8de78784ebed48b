//! Domain entities

mod forecast_report;

pub use forecast_report::{CurrentConditions, DailyOutlook, ForecastReport, Place};
