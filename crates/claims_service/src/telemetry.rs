//! Tracing subscriber setup

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServiceConfig;

/// Installs the global subscriber, ignoring an already-installed one
pub fn init_tracing(config: &ServiceConfig) {
    if let Err(err) = try_init_tracing(config) {
        tracing::debug!(error = %err, "Tracing subscriber already installed");
    }
}

/// Installs the global subscriber
///
/// `RUST_LOG` wins over `log_level`; an unparsable filter falls back to `info`.
/// Audit lines go to the `audit` target and can be filtered on their own, e.g.
/// `RUST_LOG=warn,audit=info`.
pub fn try_init_tracing(config: &ServiceConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    }
}
