//! Template engine module for rendering the dashboard and text reports
//!
//! Uses the Tera templating engine with templates embedded at compile time:
//! - `dashboard.html`: the full dashboard page (autoescaped)
//! - `report.txt`: a plain-text forecast report for terminals
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{ForecastView, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let text = engine.render_report(&ForecastView::from_report(&report))?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use domain::{DailyOutlook, ForecastReport};
use serde::Serialize;
use tera::{Context, Tera, Value};
use thiserror::Error;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// One bar-chart row of the outlook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    /// `MM-DD` label
    pub label: String,
    /// Maximum temperature in Celsius
    pub max_temp_c: f64,
    /// Minimum temperature in Celsius
    pub min_temp_c: f64,
    /// Chance of rain in percent
    pub chance_of_rain: u8,
    /// Bar height for the maximum, percent of the chart
    pub max_bar: u8,
    /// Bar height for the minimum, percent of the chart
    pub min_bar: u8,
}

/// Forecast data shaped for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastView {
    /// `"Asan (South Korea)"`
    pub place: String,
    /// Region, when reported
    pub region: Option<String>,
    /// Local time at the place, `YYYY-MM-DD HH:MM`
    pub local_time: Option<String>,
    /// Condition text as reported
    pub condition_text: String,
    /// Current temperature in Celsius
    pub temperature_c: f64,
    /// Feels-like temperature in Celsius
    pub feels_like_c: Option<f64>,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Whether the heat banner applies
    pub hot: bool,
    /// One row per forecast day
    pub days: Vec<ChartRow>,
}

impl ForecastView {
    /// Shape a report for the templates
    #[must_use]
    pub fn from_report(report: &ForecastReport) -> Self {
        Self {
            place: report.place.display_name(),
            region: report.place.region.clone(),
            local_time: report
                .place
                .local_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            condition_text: report.current.condition_text.clone(),
            temperature_c: report.current.temperature_c,
            feels_like_c: report.current.feels_like_c,
            humidity: report.current.humidity.value(),
            wind_kph: report.current.wind_kph,
            hot: report.current.heat_level().is_hot(),
            days: chart_rows(&report.days),
        }
    }
}

/// Build chart rows with bar heights scaled to the week's range
///
/// The lowest minimum sits a little above the chart floor so that the
/// coldest bar is still visible.
#[must_use]
pub fn chart_rows(days: &[DailyOutlook]) -> Vec<ChartRow> {
    let floor = days
        .iter()
        .map(|d| d.min_temp_c)
        .fold(f64::INFINITY, f64::min)
        - 2.0;
    let ceiling = days
        .iter()
        .map(|d| d.max_temp_c)
        .fold(f64::NEG_INFINITY, f64::max);

    days.iter()
        .map(|d| ChartRow {
            label: d.chart_label(),
            max_temp_c: d.max_temp_c,
            min_temp_c: d.min_temp_c,
            chance_of_rain: d.chance_of_rain,
            max_bar: scale(d.max_temp_c, floor, ceiling),
            min_bar: scale(d.min_temp_c, floor, ceiling),
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(value: f64, floor: f64, ceiling: f64) -> u8 {
    let span = ceiling - floor;
    if !span.is_finite() || span <= 0.0 {
        return 100;
    }
    (((value - floor) / span) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Everything the dashboard page needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Current value of the city input
    pub query: String,
    /// Background image URL
    pub background_url: String,
    /// Outcome status label
    pub status: String,
    /// Prompt or error message, when no forecast is shown
    pub message: Option<String>,
    /// The forecast, when one was found
    pub forecast: Option<ForecastView>,
    /// Ask the browser for its position on load
    pub request_location: bool,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const DASHBOARD: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Korea Weather Hub</title>
    <style>
        body { margin: 0; font-family: sans-serif; color: #fff; background-size: cover; background-position: center; background-attachment: fixed; }
        main { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
        .panel { background: rgba(0, 0, 0, 0.55); border-radius: 12px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; }
        .metrics { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
        .metric .label { font-size: 0.85rem; opacity: 0.8; }
        .metric .value { font-size: 1.6rem; font-weight: bold; }
        .hot { background: rgba(220, 38, 38, 0.85); }
        .chart { display: flex; align-items: flex-end; gap: 0.75rem; height: 200px; }
        .day { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; height: 100%; text-align: center; }
        .bars { display: flex; align-items: flex-end; gap: 3px; height: 100%; }
        .bar { flex: 1; border-radius: 4px 4px 0 0; }
        .bar.max { background: #f97316; }
        .bar.min { background: #38bdf8; }
        .bar.rain { background: #6366f1; }
        .day .caption { font-size: 0.8rem; margin-top: 0.25rem; }
        input { font-size: 1rem; padding: 0.5rem; width: 60%; }
    </style>
</head>
<body style="background-image: url('{{ background_url | safe }}');">
<main>
    <h1>🌤️ 스마트 날씨 대시보드</h1>
    <form class="panel" method="get" action="/">
        <label for="q">도시 이름을 한글로 입력하세요 (예: 아산, 서울, 제주)</label><br>
        <input id="q" name="q" type="text" value="{{ query }}" autocomplete="off">
        <button type="submit">검색</button>
    </form>
{% if forecast %}
    <section class="panel">
        <h2>📍 {{ forecast.place }}</h2>
        {% if forecast.local_time %}<p>{{ forecast.local_time }}</p>{% endif %}
        <div class="metrics">
            <div class="metric"><div class="label">현재 온도</div><div class="value">{{ forecast.temperature_c | celsius }}</div></div>
            <div class="metric"><div class="label">날씨 상태</div><div class="value">{{ forecast.condition_text }}</div></div>
            <div class="metric"><div class="label">습도</div><div class="value">{{ forecast.humidity }}%</div></div>
            <div class="metric"><div class="label">바람 세기 (km/h)</div><div class="value">{{ forecast.wind_kph }}</div></div>
        </div>
    </section>
    {% if forecast.hot %}<section class="panel hot"><strong>너무 더워요! 🥵</strong></section>{% endif %}
    <section class="panel">
        <h3>🌡️ 7일 최고/최저 기온 (°C)</h3>
        <div class="chart">
        {% for day in forecast.days %}
            <div class="day">
                <div class="bars">
                    <div class="bar max" style="height: {{ day.max_bar }}%" title="최고기온 {{ day.max_temp_c }}"></div>
                    <div class="bar min" style="height: {{ day.min_bar }}%" title="최저기온 {{ day.min_temp_c }}"></div>
                </div>
                <div class="caption">{{ day.label }}<br>{{ day.max_temp_c }} / {{ day.min_temp_c }}</div>
            </div>
        {% endfor %}
        </div>
    </section>
    <section class="panel">
        <h3>☔ 날짜별 강수 확률 (%)</h3>
        <div class="chart">
        {% for day in forecast.days %}
            <div class="day">
                <div class="bars"><div class="bar rain" style="height: {{ day.chance_of_rain }}%" title="강수확률(%) {{ day.chance_of_rain }}"></div></div>
                <div class="caption">{{ day.label }}<br>{{ day.chance_of_rain }}%</div>
            </div>
        {% endfor %}
        </div>
    </section>
{% else %}
    <section class="panel message" data-status="{{ status }}">{{ message }}</section>
{% endif %}
</main>
{% if request_location %}
<script>
    if ("geolocation" in navigator) {
        navigator.geolocation.getCurrentPosition(function (pos) {
            var params = new URLSearchParams();
            params.set("lat", pos.coords.latitude);
            params.set("lon", pos.coords.longitude);
            window.location.search = params.toString();
        });
    }
</script>
{% endif %}
</body>
</html>
"#;

    pub const REPORT: &str = r"📍 {{ place }}{% if local_time %} · {{ local_time }}{% endif %}

현재 온도: {{ temperature_c | celsius }}{% if feels_like_c is number %} (체감 {{ feels_like_c | celsius }}){% endif %}
날씨 상태: {{ condition_text }}
습도: {{ humidity }}%
바람 세기: {{ wind_kph }} km/h
{% if hot %}
너무 더워요! 🥵
{% endif %}
🌡️ 7일 최고/최저 기온 (°C) · ☔ 강수 확률
{% for day in days %}  {{ day.label }}  {{ day.max_temp_c | celsius }} / {{ day.min_temp_c | celsius }}  ☔ {{ day.chance_of_rain }}%
{% endfor %}";
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Dashboard page template name
    pub const DASHBOARD: &'static str = "dashboard.html";
    /// Text report template name
    pub const REPORT: &'static str = "report.txt";

    /// Create a new template engine with the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);
        tera.register_filter("celsius", celsius_filter);

        tera.add_raw_template(Self::DASHBOARD, embedded::DASHBOARD)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template(Self::REPORT, embedded::REPORT)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render the dashboard page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_dashboard(&self, view: &DashboardView) -> Result<String, TemplateError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(Self::DASHBOARD, &context)?)
    }

    /// Render a plain-text forecast report
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_report(&self, view: &ForecastView) -> Result<String, TemplateError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(Self::REPORT, &context)?)
    }
}

/// Custom filter: format a number as `"31.0°C"`
fn celsius_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let n = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("celsius requires a number"))?;
    Ok(Value::String(format!("{n:.1}°C")))
}
