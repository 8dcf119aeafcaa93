//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

const FORMATS: &[&str] = &["pretty", "json"];

/// Logging configuration from the `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Later calls are ignored once a global subscriber is installed.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                let _ = fmt().json().with_env_filter(filter).try_init();
            }
            _ => {
                let _ = fmt().with_env_filter(filter).try_init();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected pretty or json, got `{}`", self.format),
            });
        }
        Ok(())
    }

    /// Apply CLI overrides for level and format.
    pub fn apply_overrides(&mut self, level: Option<&str>, json: bool) {
        if let Some(level) = level {
            self.level = level.to_string();
        }
        if json {
            self.format = "json".into();
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_info_pretty() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config: LoggingConfig = toml::from_str(r#"format = "json""#).unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "json");
    }

    #[test]
    fn unknown_format_rejected() {
        let config: LoggingConfig = toml::from_str(r#"format = "xml""#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            })
        ));
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn overrides_apply() {
        let mut config = LoggingConfig::default();
        config.apply_overrides(Some("debug"), true);
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, "json");

        config.apply_overrides(None, false);
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, "json");
    }
}
