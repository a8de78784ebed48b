//! HTTP request handlers

pub mod cities;
pub mod common;
pub mod dashboard;
pub mod forecast;
pub mod health;
