//! # Reconciler Configuration
//!
//! Layered configuration for the reconciler, resolved in this order (later
//! wins):
//!
//! 1. Built-in defaults
//! 2. `config/reconciler.toml`
//! 3. `config/reconciler.<environment>.toml`
//! 4. `RECONCILER_*` environment variables (`RECONCILER_BATCH_SIZE=100`)
//!
//! Every file is optional. The environment comes from `RECONCILER_ENV`, then
//! `APP_ENV`, and defaults to `development`.
//!
//! ```rust,no_run
//! use delivery_reconciler::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load()?;
//! let options = config.batch_options();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::batching::BatchOptions;
use crate::constants::DEFAULT_BATCH_SIZE;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigLoader;

/// Root configuration for the reconciler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Deployment environment (`development`, `test`, `production`, ...)
    pub environment: String,

    /// Items classified per batch slice
    pub batch_size: usize,

    /// Explicit log filter; derived from the environment when absent
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            log_level: None,
        }
    }
}

impl ReconcilerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.batch_size == 0 {
            return Err(ConfigurationError::invalid_value(
                "batch_size",
                self.batch_size,
                "batch size must be at least 1",
            ));
        }

        if self.environment.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "environment",
                &self.environment,
                "environment must not be empty",
            ));
        }

        Ok(())
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions::new(self.batch_size)
    }

    /// Log filter to install: explicit level, else derived from environment
    pub fn effective_log_level(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| crate::logging::log_level_for(&self.environment).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReconcilerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.batch_options().batch_size.get(), DEFAULT_BATCH_SIZE);
        assert_eq!(config.effective_log_level(), "debug");
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let config = ReconcilerConfig {
            batch_size: 0,
            ..ReconcilerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidValue {
                field: "batch_size".to_string(),
                value: "0".to_string(),
                context: "batch size must be at least 1".to_string(),
            })
        );
    }

    #[test]
    fn test_explicit_log_level_wins() {
        let config = ReconcilerConfig {
            environment: "production".to_string(),
            log_level: Some("warn".to_string()),
            ..ReconcilerConfig::default()
        };
        assert_eq!(config.effective_log_level(), "warn");

        let config = ReconcilerConfig {
            log_level: None,
            ..config
        };
        assert_eq!(config.effective_log_level(), "info");
    }
}
