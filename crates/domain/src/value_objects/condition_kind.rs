//! Coarse classification of provider condition texts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad weather category derived from a Korean condition text
///
/// The provider returns free text such as `"맑음"`, `"가벼운 비"` or
/// `"보통 눈"` when queried with `lang=ko`. Only the categories the dashboard
/// reacts to are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// Clear / sunny (`맑음`)
    Clear,
    /// Any text mentioning rain (`비`)
    Rain,
    /// Snow (`눈`)
    Snow,
    /// Everything else (cloud, fog, ...)
    Other,
}

impl ConditionKind {
    /// Classify a condition text by substring, first match wins
    ///
    /// Order is clear, rain, snow. Sleet (`진눈깨비`) ends in `비` and
    /// therefore classifies as rain.
    #[must_use]
    pub fn from_condition_text(text: &str) -> Self {
        if text.contains("맑음") {
            Self::Clear
        } else if text.contains('비') {
            Self::Rain
        } else if text.contains('눈') {
            Self::Snow
        } else {
            Self::Other
        }
    }

    /// Short label for logs and JSON
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
