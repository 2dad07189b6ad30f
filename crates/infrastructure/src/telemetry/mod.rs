//! Telemetry infrastructure
//!
//! Structured logging through `tracing-subscriber`.

mod subscriber;

pub use subscriber::{LogFormat, TelemetryConfig, TelemetryError, init_telemetry};
