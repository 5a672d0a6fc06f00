//! Subscriber setup shared by the binaries.

use symmatria_core::error::{Result, SymmatriaError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::tracing_layer::ActivityLayer;

/// Filter used when `RUST_LOG` is unset. Matches every `symmatria*` target.
pub const DEFAULT_FILTER: &str = "symmatria=info";

/// Where formatted log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Human-readable lines on stderr
    Stderr,
    /// JSON lines on stderr
    Json,
    /// No formatted output; rely on an activity layer
    Silent,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides `default_filter`. Fails if a subscriber is already set.
pub fn init_tracing(
    default_filter: &str,
    output: LogOutput,
    activity: Option<ActivityLayer>,
) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let text = (output == LogOutput::Stderr).then(|| fmt::layer().with_writer(std::io::stderr));
    let json = (output == LogOutput::Json).then(|| fmt::layer().json().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .with(activity)
        .try_init()
        .map_err(|e| SymmatriaError::internal(format!("failed to install tracing subscriber: {e}")))
}
