//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values. Configuration only affects diagnostics on
//! stderr; the report on stdout never changes.

use serde::Deserialize;

const CONFIG_FILE: &str = "smarthome.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `smarthome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// Loading never fails: an unreadable or malformed file is replaced by
    /// the defaults and the error is handed back so the caller can log it
    /// once logging is up. An empty filter falls back to the default filter.
    pub fn load() -> (Self, Option<ConfigError>) {
        let (config, error) = Self::from_file_or_default(CONFIG_FILE);
        let config = config.with_overrides(|key| std::env::var(key).ok());
        (config, error)
    }

    fn from_file_or_default(path: &str) -> (Self, Option<ConfigError>) {
        match Self::from_file(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// `RUST_LOG` wins over `SMARTHOME_LOG`, which wins over the file.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = lookup("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if self.logging.filter.trim().is_empty() {
            self.logging = LoggingConfig::default();
        }
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthome=info,smarthome_app=info,smarthome_domain=info,smarthome_adapter_sample=info"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert!(config.logging.filter.starts_with("smarthome=info"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let (config, error) = Config::from_file_or_default("nonexistent.toml");
        assert!(error.is_none());
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("logging = 3");
        assert!(result.is_err());
    }

    #[test]
    fn should_fall_back_to_defaults_when_file_is_malformed() {
        let dir = std::env::temp_dir().join(format!("smarthome-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("smarthome.toml");
        std::fs::write(&path, "logging = 3").unwrap();

        let (config, error) = Config::from_file_or_default(path.to_str().unwrap());

        assert!(matches!(error, Some(ConfigError::Parse(_))));
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn should_override_filter_from_smarthome_log() {
        let config = Config::default().with_overrides(env(&[("SMARTHOME_LOG", "smarthome=trace")]));
        assert_eq!(config.logging.filter, "smarthome=trace");
    }

    #[test]
    fn should_prefer_rust_log_over_smarthome_log() {
        let config = Config::default()
            .with_overrides(env(&[("SMARTHOME_LOG", "warn"), ("RUST_LOG", "debug")]));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_keep_file_value_without_env_overrides() {
        let config: Config = toml::from_str("[logging]\nfilter = 'error'").unwrap();
        let config = config.with_overrides(env(&[]));
        assert_eq!(config.logging.filter, "error");
    }

    #[test]
    fn should_use_default_filter_when_rust_log_is_empty() {
        let config = Config::default().with_overrides(env(&[("RUST_LOG", "")]));
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
    }

    #[test]
    fn should_use_default_filter_when_file_filter_is_blank() {
        let config: Config = toml::from_str("[logging]\nfilter = '  '").unwrap();
        let config = config.with_overrides(env(&[]));
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
    }
}
