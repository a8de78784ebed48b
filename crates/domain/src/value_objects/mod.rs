//! Value Objects - Immutable, identity-less domain primitives

mod city_alias;
mod condition_kind;
mod forecast_query;
mod geo_location;
mod heat_level;
mod humidity;
mod query_term;

pub use city_alias::{CityAlias, CityAliasTable};
pub use condition_kind::ConditionKind;
pub use forecast_query::ForecastQuery;
pub use geo_location::GeoLocation;
pub use heat_level::HeatLevel;
pub use humidity::Humidity;
pub use query_term::{QueryTerm, Resolution};
