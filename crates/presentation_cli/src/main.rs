//! Korea Weather Hub CLI
//!
//! Command-line interface for one-shot lookups and server checks.

#![allow(clippy::print_stdout)]

mod forecast;
mod status;

use clap::{Parser, Subcommand};
use domain::CityAliasTable;
use infrastructure::{AppConfig, TelemetryConfig, TemplateEngine, init_telemetry};

/// Korea Weather Hub CLI
#[derive(Parser)]
#[command(name = "weather-hub-cli")]
#[command(author, version, about = "Korea Weather Hub CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the forecast for a city or coordinate
    ///
    /// Example: weather-hub-cli forecast 아산
    /// Example: weather-hub-cli forecast --lat 37.5665 --lon 126.978
    Forecast {
        /// City name, Korean or romanized
        city: Option<String>,

        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },

    /// List the Korean city names that are translated before lookup
    Cities,

    /// Check a running server's health and readiness
    Status {
        /// Server URL
        #[arg(short, long, default_value = "http://127.0.0.1:8501")]
        url: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let telemetry = TelemetryConfig {
        log_filter: log_filter_from_verbosity(cli.verbose).to_string(),
        ..TelemetryConfig::default()
    };
    let _telemetry_guard = init_telemetry(&telemetry)?;

    match cli.command {
        Commands::Forecast { city, lat, lon } => {
            let config = AppConfig::load()?;
            let service = forecast::service_from_config(&config)?;
            let templates = TemplateEngine::new()?;

            let input = forecast::location_input(city, lat, lon);
            let (text, code) = forecast::run(&service, &templates, input).await?;

            println!("{text}");
            if code != 0 {
                std::process::exit(code);
            }
        },

        Commands::Cities => {
            let table = CityAliasTable::korean();
            println!("🏙️  {} cities:", table.len());
            for alias in table.entries() {
                println!("   {} → {}", alias.korean, alias.query);
            }
        },

        Commands::Status { url } => {
            let client = reqwest::Client::new();
            match status::check(&client, &url).await {
                Ok(report) => {
                    println!("📊 Server Status:");
                    println!("{}", serde_json::to_string_pretty(&report.health)?);
                    if let Some(readiness) = &report.readiness {
                        println!("{}", serde_json::to_string_pretty(readiness)?);
                    }
                    if report.ready {
                        println!("✅ Ready");
                    } else {
                        println!("❌ Not ready: weather provider unavailable");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    println!("❌ Unreachable: {e}");
                    std::process::exit(1);
                },
            }
        },
    }

    Ok(())
}
