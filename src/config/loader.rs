//! Configuration Loader
//!
//! Environment-aware configuration loading on top of the `config` crate.
//! Handles environment detection, optional file discovery and environment
//! variable overrides.

use config::{Config, Environment, File, FileFormat};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

use super::error::{ConfigResult, ConfigurationError};
use super::ReconcilerConfig;
use crate::constants::DEFAULT_BATCH_SIZE;

const ENV_PREFIX: &str = "RECONCILER";
const CONFIG_FILE_STEM: &str = "reconciler";

/// Builds a [`ReconcilerConfig`] from defaults, files and environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_directory: PathBuf,
    environment: String,
    /// Replaces the process environment when set
    env_overrides: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Load configuration with environment auto-detection
    pub fn load() -> ConfigResult<ReconcilerConfig> {
        Self::new(Self::default_config_directory(), Self::detect_environment()).build()
    }

    pub fn new(config_directory: impl Into<PathBuf>, environment: impl Into<String>) -> Self {
        Self {
            config_directory: config_directory.into(),
            environment: environment.into(),
            env_overrides: None,
        }
    }

    /// Use an explicit variable map instead of reading the process environment
    pub fn with_env_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.env_overrides = Some(overrides);
        self
    }

    pub fn build(&self) -> ConfigResult<ReconcilerConfig> {
        let base_file = self.file_path(CONFIG_FILE_STEM);
        let env_file = self.file_path(&format!("{CONFIG_FILE_STEM}.{}", self.environment));

        debug!(
            environment = %self.environment,
            config_directory = %self.config_directory.display(),
            "Loading reconciler configuration"
        );

        let settings = Config::builder()
            .set_default("environment", self.environment.clone())?
            .set_default("batch_size", DEFAULT_BATCH_SIZE as i64)?
            .add_source(
                File::from(base_file.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                File::from(env_file.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(self.env_overrides.clone()),
            )
            .build()
            .map_err(|e| ConfigurationError::LoadError {
                source_name: self.config_directory.display().to_string(),
                error: e.to_string(),
            })?;

        let config: ReconcilerConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(
            environment = %config.environment,
            batch_size = config.batch_size,
            "Reconciler configuration loaded"
        );

        Ok(config)
    }

    fn file_path(&self, stem: &str) -> PathBuf {
        self.config_directory.join(format!("{stem}.toml"))
    }

    fn default_config_directory() -> PathBuf {
        std::env::var(format!("{ENV_PREFIX}_CONFIG_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"))
    }

    /// Get current environment from environment variables
    pub fn detect_environment() -> String {
        std::env::var("RECONCILER_ENV")
            .or_else(|_| std::env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn loader(dir: &Path, environment: &str, vars: &[(&str, &str)]) -> ConfigLoader {
        let overrides = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigLoader::new(dir, environment).with_env_overrides(overrides)
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = loader(dir.path(), "test", &[]).build().unwrap();

        assert_eq!(config.environment, "test");
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_environment_file_overrides_base_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("reconciler.toml"),
            "batch_size = 20\nlog_level = \"info\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("reconciler.production.toml"), "batch_size = 200\n").unwrap();

        let config = loader(dir.path(), "production", &[]).build().unwrap();
        assert_eq!(config.batch_size, 200);
        assert_eq!(config.log_level.as_deref(), Some("info"));

        let config = loader(dir.path(), "development", &[]).build().unwrap();
        assert_eq!(config.batch_size, 20);
    }

    #[test]
    fn test_environment_variables_win() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("reconciler.toml"), "batch_size = 20\n").unwrap();

        let config = loader(dir.path(), "test", &[("RECONCILER_BATCH_SIZE", "75")])
            .build()
            .unwrap();
        assert_eq!(config.batch_size, 75);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = loader(dir.path(), "test", &[("RECONCILER_BATCH_SIZE", "0")]).build();

        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidValue { ref field, .. }) if field == "batch_size"
        ));
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("reconciler.toml"), "batch_size = [").unwrap();

        let result = loader(dir.path(), "test", &[]).build();
        assert!(matches!(result, Err(ConfigurationError::LoadError { .. })));
    }
}
