//! Structured logging setup built on `tracing`.
//!
//! The simulation engine emits `debug!`/`trace!` spans per processed event;
//! this module owns the subscriber installation so binaries get a uniform
//! format and an env-controlled filter (`RUST_LOG`).

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber. Call once, early in `main`.
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .init()
    }
}
