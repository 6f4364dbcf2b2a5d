//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{LOG_ENV_VAR, TRACING_TARGET};

static INIT: Once = Once::new();

/// Initialize the netgauge tracing/logging system.
///
/// Reads `NETGAUGE_LOG` for per-crate log levels.
/// Format: `NETGAUGE_LOG=netgauge_engine=debug,netgauge_collectors=warn`
///
/// Falls back to `netgauge=<observability.log_level>` when `NETGAUGE_LOG` is
/// unset or invalid. Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive(&config.log_level)));

        if config.json_logs {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn fallback_directive(level: &str) -> String {
    format!("{TRACING_TARGET}={level}")
}
