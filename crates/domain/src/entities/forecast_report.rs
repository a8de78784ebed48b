//! Forecast report entity
//!
//! The normalized result of one forecast lookup: where the provider placed
//! the query, what it looks like outside right now, and the daily outlook.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ConditionKind, HeatLevel, Humidity};

/// The place the provider resolved the query to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Place name (e.g. "Asan")
    pub name: String,
    /// Province or region, when reported
    pub region: Option<String>,
    /// Country name
    pub country: String,
    /// Local time at the place, when reported
    pub local_time: Option<NaiveDateTime>,
}

impl Place {
    /// Header form used by the dashboard: `"Asan (South Korea)"`
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.country)
    }
}

/// Current conditions at the place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Condition text in the requested language (e.g. "맑음")
    pub condition_text: String,
    /// Provider condition code, when reported
    pub condition_code: Option<u16>,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Feels-like temperature in Celsius, when reported
    pub feels_like_c: Option<f64>,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in km/h
    pub wind_kph: f64,
}

impl CurrentConditions {
    /// Heat classification of the current temperature
    #[must_use]
    pub fn heat_level(&self) -> HeatLevel {
        HeatLevel::from_celsius(self.temperature_c)
    }

    /// Coarse category of the condition text
    #[must_use]
    pub fn condition_kind(&self) -> ConditionKind {
        ConditionKind::from_condition_text(&self.condition_text)
    }
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOutlook {
    /// Forecast date
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius
    pub min_temp_c: f64,
    /// Chance of rain in percent (0-100)
    pub chance_of_rain: u8,
}

impl DailyOutlook {
    /// Chart label: the date without the year (`"07-21"`)
    #[must_use]
    pub fn chart_label(&self) -> String {
        self.date.format("%m-%d").to_string()
    }
}

/// A complete forecast for one place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Resolved place
    pub place: Place,
    /// Current conditions
    pub current: CurrentConditions,
    /// Daily outlook in date order
    pub days: Vec<DailyOutlook>,
}
