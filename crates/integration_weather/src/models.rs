//! Weather data models
//!
//! Wire types for the WeatherAPI.com `forecast.json` response and the
//! normalized types handed to callers.
//!
//! Every wire field is optional so that a partial body deserializes; the
//! conversion to [`Forecast`] decides what is required.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::client::WeatherError;

/// Provider error code for "No matching location found"
pub const NO_MATCHING_LOCATION: u32 = 1006;

/// Place the provider matched the query to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Place name
    pub name: String,
    /// Region or province
    pub region: Option<String>,
    /// Country name
    pub country: String,
    /// Local time at the place
    pub local_time: Option<NaiveDateTime>,
}

/// Current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Localized condition text
    pub condition_text: String,
    /// Provider condition code
    pub condition_code: Option<u16>,
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Feels-like temperature in Celsius
    pub feels_like_c: Option<f64>,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_kph: f64,
}

/// One day of the outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast date
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius
    pub min_temp_c: f64,
    /// Chance of rain in percent (0-100)
    pub chance_of_rain: u8,
}

/// Complete forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Matched place
    pub location: Location,
    /// Current conditions
    pub current: CurrentWeather,
    /// Daily outlook in provider order
    pub days: Vec<ForecastDay>,
}

// Raw API response types (internal)

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiResponse {
    pub location: Option<ApiLocation>,
    pub current: Option<ApiCurrent>,
    pub forecast: Option<ApiForecast>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLocation {
    pub name: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub localtime: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCurrent {
    pub temp_c: Option<f64>,
    pub feelslike_c: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_kph: Option<f64>,
    pub condition: Option<ApiCondition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    pub text: Option<String>,
    pub code: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecast {
    #[serde(default)]
    pub forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecastDay {
    pub date: Option<String>,
    pub day: Option<ApiDay>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDay {
    pub maxtemp_c: Option<f64>,
    pub mintemp_c: Option<f64>,
    pub daily_chance_of_rain: Option<f64>,
}

/// Body the provider sends with a failure status
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub code: u32,
    #[serde(default)]
    pub message: String,
}

fn missing(field: &str) -> WeatherError {
    WeatherError::ParseError(format!("Missing field in response: {field}"))
}

/// Clamp a provider percentage into 0-100
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

impl ApiResponse {
    /// Normalize into a [`Forecast`]
    ///
    /// A missing `location`, `current` or `forecast` block, or a missing
    /// field inside them, is a parse error. Malformed days are rejected too.
    pub(crate) fn into_forecast(self) -> Result<Forecast, WeatherError> {
        let location = self.location.ok_or_else(|| missing("location"))?;
        let current = self.current.ok_or_else(|| missing("current"))?;
        let forecast = self.forecast.ok_or_else(|| missing("forecast"))?;

        let days = forecast
            .forecastday
            .into_iter()
            .map(ApiForecastDay::into_day)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Forecast {
            location: location.into_location()?,
            current: current.into_current()?,
            days,
        })
    }
}

impl ApiLocation {
    fn into_location(self) -> Result<Location, WeatherError> {
        Ok(Location {
            name: self.name.ok_or_else(|| missing("location.name"))?,
            region: self.region.filter(|r| !r.is_empty()),
            country: self.country.ok_or_else(|| missing("location.country"))?,
            local_time: self
                .localtime
                .as_deref()
                .and_then(|t| NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M").ok()),
        })
    }
}

impl ApiCurrent {
    fn into_current(self) -> Result<CurrentWeather, WeatherError> {
        let condition = self.condition.ok_or_else(|| missing("current.condition"))?;
        Ok(CurrentWeather {
            condition_text: condition
                .text
                .ok_or_else(|| missing("current.condition.text"))?,
            condition_code: condition.code,
            temperature_c: self.temp_c.ok_or_else(|| missing("current.temp_c"))?,
            feels_like_c: self.feelslike_c,
            humidity: percent(self.humidity.ok_or_else(|| missing("current.humidity"))?),
            wind_kph: self.wind_kph.ok_or_else(|| missing("current.wind_kph"))?,
        })
    }
}

impl ApiForecastDay {
    fn into_day(self) -> Result<ForecastDay, WeatherError> {
        let raw_date = self.date.ok_or_else(|| missing("forecastday.date"))?;
        let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
            .map_err(|e| WeatherError::ParseError(format!("Invalid date {raw_date}: {e}")))?;
        let day = self.day.ok_or_else(|| missing("forecastday.day"))?;

        Ok(ForecastDay {
            date,
            max_temp_c: day.maxtemp_c.ok_or_else(|| missing("day.maxtemp_c"))?,
            min_temp_c: day.mintemp_c.ok_or_else(|| missing("day.mintemp_c"))?,
            chance_of_rain: percent(
                day.daily_chance_of_rain
                    .ok_or_else(|| missing("day.daily_chance_of_rain"))?,
            ),
        })
    }
}
