//! Logging infrastructure
//!
//! Installs the process-wide `tracing` subscriber.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
