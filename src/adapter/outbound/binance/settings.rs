//! Binance configuration.

use std::fmt;

use serde::Deserialize;

use crate::adapter::outbound::http::{validate_base_url, HttpSettings};
use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Binance settings from the `[binance]` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Public market data base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Web front-end URL used for trade links.
    #[serde(default = "default_web_url")]
    pub web_url: String,
    #[serde(default)]
    pub http: HttpSettings,
}

const fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://data-api.binance.vision".into()
}

fn default_web_url() -> String {
    "https://www.binance.com".into()
}

impl Default for BinanceSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            web_url: default_web_url(),
            http: HttpSettings::default(),
        }
    }
}

impl BinanceSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url("binance.base_url", &self.base_url)?;
        validate_base_url("binance.web_url", &self.web_url)?;
        self.http.validate()
    }
}

/// Optional Binance API keys. Public market data does not need them.
#[derive(Clone)]
pub struct BinanceCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl BinanceCredentials {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty())?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self {
            api_key,
            api_secret,
        })
    }
}

impl fmt::Debug for BinanceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinanceCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
