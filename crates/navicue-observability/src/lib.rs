//! # navicue-observability
//!
//! Structured tracing for the engine crates and an in-memory telemetry log
//! that receives every applied `CueOutcome`.

pub mod telemetry;
pub mod tracing_setup;

pub use telemetry::{TelemetryEvent, TelemetryLog};
pub use tracing_setup::init_tracing;
