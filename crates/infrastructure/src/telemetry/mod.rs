//! Logging and distributed tracing infrastructure
//!
//! Installs the `tracing` subscriber and, optionally, OpenTelemetry export.

mod otel;

pub use otel::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
