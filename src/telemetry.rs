//! Structured logging setup.
//!
//! The library only emits `tracing` events; embedding applications call
//! [`init_tracing`] once at startup to print them.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when neither `RUST_LOG` nor a caller default is usable.
pub const DEFAULT_DIRECTIVE: &str = "taskboard=info";

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A filter directive could not be parsed.
    #[error("invalid log filter directive: {0}")]
    InvalidDirective(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` when the variable is unset or empty.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidDirective`] when the effective directive
/// does not parse, or [`TelemetryError::AlreadyInstalled`] when a global
/// subscriber has already been set.
pub fn init_tracing(default_directive: &str) -> Result<(), TelemetryError> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_for(env_directive.as_deref(), default_directive)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}

fn filter_for(env_directive: Option<&str>, default_directive: &str) -> Result<EnvFilter, ParseError> {
    let directive = env_directive
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default_directive);
    EnvFilter::try_new(directive)
}
