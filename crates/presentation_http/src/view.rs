//! View-model shaping for the dashboard page
//!
//! Everything here is a pure function of the lookup outcome: the background
//! image, the heat banner, and the chart rows.

use application::DashboardOutcome;
use domain::ConditionKind;
use infrastructure::{DashboardView, ForecastView};

/// Background shown before a lookup and for unclassified conditions
pub const DEFAULT_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1534088568595-a066f7104211?q=80&w=2000";
/// Background for clear skies
pub const CLEAR_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1500382017468-9049fed747ef?q=80&w=2000";
/// Background for rain
pub const RAIN_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1515694346937-94d85e41e6f0?q=80&w=2000";
/// Background for snow
pub const SNOW_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1491002052546-bf38f186af56?q=80&w=2000";

/// Image URL for a condition class
#[must_use]
pub const fn background_url(kind: ConditionKind) -> &'static str {
    match kind {
        ConditionKind::Clear => CLEAR_BACKGROUND,
        ConditionKind::Rain => RAIN_BACKGROUND,
        ConditionKind::Snow => SNOW_BACKGROUND,
        ConditionKind::Other => DEFAULT_BACKGROUND,
    }
}

/// Background for an outcome; only a found report changes it
#[must_use]
pub fn outcome_background(outcome: &DashboardOutcome) -> &'static str {
    outcome
        .report()
        .map_or(DEFAULT_BACKGROUND, |r| background_url(r.current.condition_kind()))
}

/// Assemble the dashboard page model
///
/// `query` is echoed back into the search box. `request_location` asks the
/// page to prompt for the browser position.
#[must_use]
pub fn dashboard_view(
    query: &str,
    outcome: &DashboardOutcome,
    request_location: bool,
) -> DashboardView {
    DashboardView {
        query: query.to_string(),
        background_url: outcome_background(outcome).to_string(),
        status: outcome.status().to_string(),
        message: outcome.message().map(str::to_string),
        forecast: outcome.report().map(ForecastView::from_report),
        request_location,
    }
}
