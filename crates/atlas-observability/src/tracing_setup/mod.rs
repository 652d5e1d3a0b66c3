//! Tracing setup: human-readable or JSON output, filtered by `ATLAS_LOG`.

pub mod spans;

use std::sync::Once;

use atlas_core::config::ObservabilityConfig;
use atlas_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `ATLAS_LOG` takes precedence over `config.log_level`. Logs go to stderr so
/// they never mix with rendered answers. Idempotent: later calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), &config.log_level);
        let registry = tracing_subscriber::registry().with(filter);

        // try_init: a test harness may already own the global subscriber.
        let _ = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()
        };
    });
}

/// Filter from the environment directive, falling back to the configured
/// level, then to `info`.
fn build_filter(env_directive: Option<&str>, configured: &str) -> EnvFilter {
    env_directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
