//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; API keys and the bot token are
//! only ever read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use tickerbot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::binance::BinanceSettings;
use crate::adapter::outbound::coinswitch::CoinswitchSettings;
use crate::adapter::outbound::delta::DeltaSettings;
use crate::domain::VenueId;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Telegram command handling.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Delta Exchange (`/news`).
    #[serde(default)]
    pub delta: DeltaSettings,

    /// CoinSwitch (`/fetch`, `/test2`).
    #[serde(default)]
    pub coinswitch: CoinswitchSettings,

    /// Binance public data (`/binance`, `/symbol`).
    #[serde(default)]
    pub binance: BinanceSettings,
}

impl Config {
    /// Parse configuration from TOML content and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`Self::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        Self::load(path)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.delta.validate()?;
        self.coinswitch.validate()?;
        self.binance.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Whether `venue` is switched on in its config section.
    #[must_use]
    pub fn is_enabled(&self, venue: VenueId) -> bool {
        match venue {
            VenueId::Delta => self.delta.enabled,
            VenueId::Coinswitch => self.coinswitch.enabled,
            VenueId::Binance => self.binance.enabled,
        }
    }

    /// Venues enabled in the config, in declaration order.
    #[must_use]
    pub fn enabled_venues(&self) -> Vec<VenueId> {
        VenueId::ALL
            .into_iter()
            .filter(|venue| self.is_enabled(*venue))
            .collect()
    }

    /// Initialize the global tracing subscriber.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
