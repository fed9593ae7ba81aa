use std::fmt;
use tracing::Span;
use tracing_subscriber::{fmt as fmt_layer, prelude::*, EnvFilter};
use uuid::Uuid;

// ============================================================================
// Telemetry - structured logging and request correlation
// ============================================================================

pub const CORRELATION_ID_HEADER: &str = "X-Correlation-Id";

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Returns false when a subscriber was already installed (tests, embedding).
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(fmt_layer::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init()
        .is_ok()
}

/// Identifier tying together every log line emitted for one inbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Reuse the caller's header value when it carries one, otherwise mint a UUID
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self(v.to_string()),
            _ => Self::generate(),
        }
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Span to enter for the duration of the request
    pub fn span(&self) -> Span {
        tracing::info_span!("request", correlation_id = %self.0)
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
