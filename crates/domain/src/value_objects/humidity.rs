//! Relative humidity shown in the dashboard metrics panel

use serde::{Deserialize, Serialize};

/// Relative humidity in whole percent, always within 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Humidity(u8);

impl Humidity {
    /// Build from a provider percentage; anything above 100 is capped
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        Self(if percent > 100 { 100 } else { percent })
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Humidity {
    fn from(percent: u8) -> Self {
        Self::clamped(percent)
    }
}

impl From<Humidity> for u8 {
    fn from(h: Humidity) -> Self {
        h.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_at_one_hundred() {
        assert_eq!(Humidity::clamped(0).value(), 0);
        assert_eq!(Humidity::clamped(100).value(), 100);
        assert_eq!(Humidity::clamped(255).value(), 100);
    }

    #[test]
    fn json_is_a_bare_number() {
        let h = Humidity::clamped(82);
        assert_eq!(serde_json::to_string(&h).expect("serialize"), "82");
        let capped: Humidity = serde_json::from_str("140").expect("deserialize");
        assert_eq!(capped.value(), 100);
    }
}
