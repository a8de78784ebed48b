//! Heat classification of the current temperature

use serde::{Deserialize, Serialize};

/// Whether the current temperature warrants a heat warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    /// Below the threshold
    Normal,
    /// At or above [`HeatLevel::HOT_THRESHOLD_C`]
    Hot,
}

impl HeatLevel {
    /// Temperature in °C from which the dashboard warns about heat
    pub const HOT_THRESHOLD_C: f64 = 30.0;

    /// Classify a temperature in °C
    #[must_use]
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature >= Self::HOT_THRESHOLD_C {
            Self::Hot
        } else {
            Self::Normal
        }
    }

    /// Whether this is the hot level
    #[must_use]
    pub const fn is_hot(&self) -> bool {
        matches!(self, Self::Hot)
    }
}
