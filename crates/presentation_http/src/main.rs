//! Korea Weather Hub HTTP Server
//!
//! Main entry point for the dashboard server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::{DashboardService, WeatherPort};
use infrastructure::{AppConfig, TemplateEngine, WeatherAdapter, init_telemetry};
use presentation_http::{routes, server, state::AppState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first so that it can shape logging
    let config = AppConfig::load().context("Failed to load configuration")?;

    let mut telemetry = config.telemetry.clone();
    telemetry.json_logs = telemetry.json_logs || config.server.json_logs();
    let _telemetry_guard = init_telemetry(&telemetry)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {e}"))?;

    info!("🌤️ Korea Weather Hub v{} starting...", env!("CARGO_PKG_VERSION"));

    // A missing key is fatal before any request is served
    let client_config = config.weather_client_config()?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        provider = %client_config.base_url,
        "Configuration loaded"
    );

    let adapter = WeatherAdapter::with_config(client_config)?;
    let weather: Arc<dyn WeatherPort> = Arc::new(adapter);

    let state = AppState {
        dashboard: Arc::new(DashboardService::new(weather)),
        templates: TemplateEngine::new()?,
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Dashboard listening on http://{}", addr);

    let drain_timeout =
        Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    server::serve(listener, app, server::shutdown_signal(), drain_timeout).await?;

    info!("👋 Server shutdown complete");

    Ok(())
}
