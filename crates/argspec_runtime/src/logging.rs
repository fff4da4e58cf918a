//! Log subscriber setup for the `argspec` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::RuntimeConfig;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "ARGSPEC_LOG";

/// Builds the filter: `ARGSPEC_LOG` if set and valid, else a level derived
/// from the configured verbosity.
#[must_use]
pub fn filter(config: &RuntimeConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| config.default_log_filter().into())
}

/// Installs a stderr subscriber. Does nothing if one is already installed.
pub fn init(config: &RuntimeConfig) {
    let _ = tracing_subscriber::registry()
        .with(filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
