//! Operational telemetry port
//!
//! Services report notable events through [`Telemetry`] instead of logging
//! directly, so hosts can route them elsewhere and tests can observe them.
//! [`TracingTelemetry`] is the default and forwards everything to `tracing`.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Notable events raised by the overlay services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    /// The catalogue loaded and is serving real data
    RegistryInitialized { commands: usize },
    /// The catalogue failed to load and the fallback set is in use
    RegistryFallback { reason: String, commands: usize },
    RecoveryAttempted { healthy: bool },
    /// Context analysis failed and fell back to the full catalogue
    AnalyzerFailure { reason: String },
    /// Content was served from the hand-authored limited set
    ContentDegraded { reason: String },
    ContentTruncated { rendered: usize, total: usize },
    /// Content generation failed and an error panel was produced
    GenerationFailure { reason: String },
}

pub trait Telemetry: Send + Sync + fmt::Debug {
    fn record(&self, event: &TelemetryEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn record(&self, event: &TelemetryEvent) {
        match event {
            TelemetryEvent::RegistryInitialized { commands } => {
                info!(commands, "Command registry initialized");
            }
            TelemetryEvent::RegistryFallback { reason, commands } => {
                warn!(%reason, commands, "Command registry using fallback catalogue");
            }
            TelemetryEvent::RecoveryAttempted { healthy } => {
                info!(healthy, "Command registry recovery attempted");
            }
            TelemetryEvent::AnalyzerFailure { reason } => {
                warn!(%reason, "Context analysis failed, showing all commands");
            }
            TelemetryEvent::ContentDegraded { reason } => {
                warn!(%reason, "Serving limited overlay content");
            }
            TelemetryEvent::ContentTruncated { rendered, total } => {
                debug!(rendered, total, "Overlay content truncated");
            }
            TelemetryEvent::GenerationFailure { reason } => {
                warn!(%reason, "Overlay content generation failed");
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn record(&self, _event: &TelemetryEvent) {}
}

/// Default telemetry sink
pub fn default_telemetry() -> Arc<dyn Telemetry> {
    Arc::new(TracingTelemetry)
}
