//! Delta Exchange configuration.

use std::fmt;

use serde::Deserialize;

use crate::adapter::outbound::http::{validate_base_url, HttpSettings};
use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "DELTA_API_KEY";
pub const API_SECRET_ENV: &str = "DELTA_API_SECRET";

/// Delta Exchange settings from the `[delta]` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct DeltaSettings {
    /// Register the `/news` command.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// REST API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Web front-end URL used for product links.
    #[serde(default = "default_web_url")]
    pub web_url: String,
    #[serde(default)]
    pub http: HttpSettings,
}

const fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.delta.exchange".into()
}

fn default_web_url() -> String {
    "https://www.delta.exchange".into()
}

impl Default for DeltaSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            web_url: default_web_url(),
            http: HttpSettings::default(),
        }
    }
}

impl DeltaSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url("delta.base_url", &self.base_url)?;
        validate_base_url("delta.web_url", &self.web_url)?;
        self.http.validate()
    }
}

/// API key pair for signed Delta requests.
#[derive(Clone)]
pub struct DeltaCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl DeltaCredentials {
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read `DELTA_API_KEY` and `DELTA_API_SECRET`. Returns `None` unless both
    /// are set and non-empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty())?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self::new(api_key, api_secret))
    }
}

impl fmt::Debug for DeltaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeltaCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let settings = DeltaSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.base_url, "https://api.delta.exchange");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = DeltaCredentials::new("key-1", "super-secret");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("key-1"));
        assert!(!rendered.contains("super-secret"));
    }
}
