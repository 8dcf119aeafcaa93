//! CoinSwitch configuration.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::adapter::outbound::http::{validate_base_url, HttpSettings};
use crate::adapter::outbound::signing::Ed25519Signer;
use crate::error::{ConfigError, Result};

pub const API_KEY_ENV: &str = "COINSWITCH_API_KEY";
pub const SECRET_KEY_ENV: &str = "COINSWITCH_SECRET_KEY";

/// CoinSwitch settings from the `[coinswitch]` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinswitchSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Web front-end URL used for pair links.
    #[serde(default = "default_base_url")]
    pub web_url: String,
    /// Value of the `exchange` query parameter.
    #[serde(default = "default_exchange")]
    pub exchange: String,
    /// Directory holding ticker snapshots.
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
    #[serde(default)]
    pub http: HttpSettings,
}

const fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://coinswitch.co".into()
}

fn default_exchange() -> String {
    "EXCHANGE_2".into()
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for CoinswitchSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
            web_url: default_base_url(),
            exchange: default_exchange(),
            snapshot_dir: default_snapshot_dir(),
            http: HttpSettings::default(),
        }
    }
}

impl CoinswitchSettings {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_base_url("coinswitch.base_url", &self.base_url)?;
        validate_base_url("coinswitch.web_url", &self.web_url)?;
        if self.exchange.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "coinswitch.exchange",
            });
        }
        if self.snapshot_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "coinswitch.snapshot_dir",
            });
        }
        self.http.validate()
    }
}

/// API key and Ed25519 signer for CoinSwitch.
#[derive(Clone)]
pub struct CoinswitchCredentials {
    pub api_key: String,
    pub signer: Ed25519Signer,
}

impl CoinswitchCredentials {
    pub fn new(api_key: impl Into<String>, secret_key_hex: &str) -> Result<Self> {
        Ok(Self {
            api_key: api_key.into(),
            signer: Ed25519Signer::from_hex(secret_key_hex)?,
        })
    }

    /// Read `COINSWITCH_API_KEY` and `COINSWITCH_SECRET_KEY`.
    ///
    /// Returns `Ok(None)` when either is unset, and an error when the secret
    /// is present but not a valid Ed25519 key.
    pub fn from_env() -> Result<Option<Self>> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty());
        let secret = std::env::var(SECRET_KEY_ENV).ok().filter(|v| !v.is_empty());
        match (api_key, secret) {
            (Some(api_key), Some(secret)) => Self::new(api_key, &secret).map(Some),
            _ => Ok(None),
        }
    }
}

impl fmt::Debug for CoinswitchCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoinswitchCredentials")
            .field("api_key", &self.api_key)
            .field("signer", &self.signer)
            .finish()
    }
}
