//! # Structured Logging Module
//!
//! Environment-aware structured logging to stdout. Production emits JSON lines,
//! every other environment emits human-readable output. `RUST_LOG` overrides
//! the level derived from the environment.

use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::ReconcilerConfig;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging from the given configuration
///
/// Safe to call more than once; only the first call installs a subscriber,
/// and an already-installed global subscriber is left in place.
pub fn init_structured_logging(config: &ReconcilerConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let log_level = config.effective_log_level();
        let use_json = config.environment == "production";

        let filter = || {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level))
        };

        let json_layer = use_json.then(|| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_filter(filter())
        });

        let text_layer = (!use_json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter())
        });

        let subscriber = tracing_subscriber::registry().with(json_layer).with(text_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %config.environment,
            log_level = %log_level,
            json = use_json,
            "Structured logging initialized"
        );
    });
}

/// Log level based on environment
pub fn log_level_for(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Log structured data for one reconciliation
pub fn log_reconcile_operation(
    operation: &str,
    destination: &str,
    status: u16,
    jobs: usize,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        destination = %destination,
        status = status,
        jobs = jobs,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "RECONCILE_OPERATION"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level_for("test"), "debug");
        assert_eq!(log_level_for("development"), "debug");
        assert_eq!(log_level_for("production"), "info");
        assert_eq!(log_level_for("unknown"), "debug");
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = ReconcilerConfig {
            environment: "test".to_string(),
            ..ReconcilerConfig::default()
        };

        init_structured_logging(&config);
        init_structured_logging(&config);
        log_reconcile_operation("handle_success", "ITERABLE", 200, 3, None);
    }
}
