//! Integration tests for CLI
//!
//! These tests verify command parsing against a mirror of the CLI
//! definition in main.rs.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages
#![allow(clippy::unwrap_used)]

use std::ffi::OsString;

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "weather-hub-cli")]
#[command(author, version, about = "Korea Weather Hub CLI", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Forecast {
        city: Option<String>,
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },
    Cities,
    Status {
        #[arg(short, long, default_value = "http://127.0.0.1:8501")]
        url: String,
    },
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_forecast_with_korean_city() {
    let cli = parse_args(&["weather-hub-cli", "forecast", "아산"]).unwrap();
    if let Commands::Forecast { city, lat, lon } = cli.command {
        assert_eq!(city.as_deref(), Some("아산"));
        assert!(lat.is_none());
        assert!(lon.is_none());
    } else {
        panic!("Expected Forecast command");
    }
}

#[test]
fn cli_parses_forecast_with_coordinates() {
    let cli = parse_args(&[
        "weather-hub-cli",
        "forecast",
        "--lat",
        "37.5665",
        "--lon",
        "126.978",
    ])
    .unwrap();
    if let Commands::Forecast { city, lat, lon } = cli.command {
        assert!(city.is_none());
        assert_eq!(lat, Some(37.5665));
        assert_eq!(lon, Some(126.978));
    } else {
        panic!("Expected Forecast command");
    }
}

#[test]
fn cli_parses_forecast_without_arguments() {
    let cli = parse_args(&["weather-hub-cli", "forecast"]).unwrap();
    assert!(matches!(cli.command, Commands::Forecast { city: None, .. }));
}

#[test]
fn cli_rejects_non_numeric_latitude() {
    let result = parse_args(&["weather-hub-cli", "forecast", "--lat", "north", "--lon", "127"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_cities_command() {
    let cli = parse_args(&["weather-hub-cli", "cities"]).unwrap();
    assert!(matches!(cli.command, Commands::Cities));
}

#[test]
fn cli_parses_status_with_default_url() {
    let cli = parse_args(&["weather-hub-cli", "status"]).unwrap();
    if let Commands::Status { url } = cli.command {
        assert_eq!(url, "http://127.0.0.1:8501");
    } else {
        panic!("Expected Status command");
    }
}

#[test]
fn cli_parses_status_with_custom_url() {
    let cli = parse_args(&["weather-hub-cli", "status", "-u", "http://pi:8501"]).unwrap();
    if let Commands::Status { url } = cli.command {
        assert_eq!(url, "http://pi:8501");
    } else {
        panic!("Expected Status command");
    }
}

#[test]
fn cli_counts_verbosity() {
    let cli = parse_args(&["weather-hub-cli", "-vv", "cities"]).unwrap();
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["weather-hub-cli"]).is_err());
}
