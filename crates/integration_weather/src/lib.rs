//! WeatherAPI.com integration
//!
//! Client for the WeatherAPI.com forecast endpoint (<https://www.weatherapi.com>).
//! One request returns current conditions and a multi-day outlook.

pub mod client;
mod models;

pub use client::{ForecastRequest, WeatherApiClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentWeather, Forecast, ForecastDay, Location, NO_MATCHING_LOCATION};
