//! Composition root: builds venues from config and environment credentials.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::inbound::telegram::CommandRouter;
use crate::adapter::outbound::binance::{BinanceCredentials, BinanceVenue};
use crate::adapter::outbound::coinswitch::{
    CoinswitchCredentials, CoinswitchVenue, SECRET_KEY_ENV,
};
use crate::adapter::outbound::delta::{DeltaCredentials, DeltaVenue};
use crate::domain::VenueId;
use crate::error::{ConfigError, ExchangeError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::Venue;

/// API credentials for every venue, as found in the environment.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub delta: Option<DeltaCredentials>,
    pub coinswitch: Option<CoinswitchCredentials>,
    /// Why the CoinSwitch keys were rejected. Only CoinSwitch fails on it.
    pub coinswitch_error: Option<String>,
    pub binance: Option<BinanceCredentials>,
}

impl Credentials {
    /// Read all venue credentials from the environment.
    ///
    /// A malformed CoinSwitch secret is kept as [`Self::coinswitch_error`]
    /// so the other venues still start.
    #[must_use]
    pub fn from_env() -> Self {
        let (coinswitch, coinswitch_error) = match CoinswitchCredentials::from_env() {
            Ok(creds) => (creds, None),
            Err(e) => {
                warn!(error = %e, "CoinSwitch credentials rejected");
                (None, Some(e.to_string()))
            }
        };
        Self {
            delta: DeltaCredentials::from_env(),
            coinswitch,
            coinswitch_error,
            binance: BinanceCredentials::from_env(),
        }
    }

    #[must_use]
    pub fn is_present(&self, venue: VenueId) -> bool {
        match venue {
            VenueId::Delta => self.delta.is_some(),
            VenueId::Coinswitch => self.coinswitch.is_some(),
            VenueId::Binance => self.binance.is_some(),
        }
    }

    /// Reason the keys for `venue` were present but unusable.
    #[must_use]
    pub fn rejection(&self, venue: VenueId) -> Option<&str> {
        match venue {
            VenueId::Coinswitch => self.coinswitch_error.as_deref(),
            VenueId::Delta | VenueId::Binance => None,
        }
    }
}

/// Whether `venue` cannot run without credentials.
#[must_use]
pub const fn requires_credentials(venue: VenueId) -> bool {
    matches!(venue, VenueId::Coinswitch)
}

/// Build one venue.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for CoinSwitch with a malformed
/// secret and [`ExchangeError::MissingCredentials`] for CoinSwitch without
/// keys.
pub fn build_venue(
    venue: VenueId,
    config: &Config,
    credentials: &Credentials,
) -> Result<Arc<dyn Venue>> {
    let built: Arc<dyn Venue> = match venue {
        VenueId::Delta => {
            if credentials.delta.is_none() {
                warn!("Delta credentials not set; tickers are fetched without an api-key");
            }
            Arc::new(DeltaVenue::new(&config.delta, credentials.delta.clone()))
        }
        VenueId::Coinswitch => {
            if let Some(reason) = &credentials.coinswitch_error {
                return Err(ConfigError::InvalidValue {
                    field: SECRET_KEY_ENV,
                    reason: reason.clone(),
                }
                .into());
            }
            let creds = credentials.coinswitch.clone().ok_or(
                ExchangeError::MissingCredentials {
                    venue: "coinswitch",
                    env: "COINSWITCH_API_KEY and COINSWITCH_SECRET_KEY",
                },
            )?;
            Arc::new(CoinswitchVenue::new(&config.coinswitch, creds))
        }
        VenueId::Binance => Arc::new(BinanceVenue::new(&config.binance)),
    };
    info!(venue = %venue, "Venue ready");
    Ok(built)
}

/// Build a router over `venues`.
///
/// # Errors
///
/// Fails if any requested venue cannot be built.
pub fn build_router(
    venues: &[VenueId],
    config: &Config,
    credentials: &Credentials,
) -> Result<CommandRouter> {
    let built = venues
        .iter()
        .map(|venue| build_venue(*venue, config, credentials))
        .collect::<Result<Vec<_>>>()?;
    Ok(CommandRouter::new(built))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    #[test]
    fn public_venues_build_without_credentials() {
        let config = Config::default();
        let router = build_router(
            &[VenueId::Delta, VenueId::Binance],
            &config,
            &Credentials::default(),
        )
        .unwrap();
        let names: Vec<&str> = router.commands().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["news", "binance", "symbol", "help"]);
    }

    #[test]
    fn coinswitch_needs_credentials() {
        let result = build_venue(
            VenueId::Coinswitch,
            &Config::default(),
            &Credentials::default(),
        );
        assert!(matches!(
            result,
            Err(Error::Exchange(ExchangeError::MissingCredentials {
                venue: "coinswitch",
                ..
            }))
        ));
    }

    #[test]
    fn coinswitch_builds_with_credentials() {
        let credentials = Credentials {
            coinswitch: Some(CoinswitchCredentials::new("key", SEED).unwrap()),
            ..Credentials::default()
        };
        assert!(credentials.is_present(VenueId::Coinswitch));
        let venue = build_venue(VenueId::Coinswitch, &Config::default(), &credentials).unwrap();
        assert_eq!(venue.id(), VenueId::Coinswitch);
        assert!(venue.handles("fetch"));
        assert!(venue.handles("test2"));
    }

    #[test]
    fn malformed_coinswitch_secret_only_fails_coinswitch() {
        let credentials = Credentials {
            coinswitch_error: Some("secret key must be 32 or 64 bytes, got 3".into()),
            ..Credentials::default()
        };
        assert!(!credentials.is_present(VenueId::Coinswitch));
        assert!(credentials.rejection(VenueId::Coinswitch).is_some());

        let router = build_router(
            &[VenueId::Delta, VenueId::Binance],
            &Config::default(),
            &credentials,
        )
        .unwrap();
        assert!(router.commands().iter().any(|c| c.name == "news"));
        assert!(router.commands().iter().any(|c| c.name == "binance"));

        let result = build_venue(VenueId::Coinswitch, &Config::default(), &credentials);
        let Err(Error::Config(ConfigError::InvalidValue { field, reason })) = result else {
            panic!("expected the stored rejection");
        };
        assert_eq!(field, "COINSWITCH_SECRET_KEY");
        assert!(reason.contains("32 or 64 bytes"));
    }

    #[test]
    fn only_coinswitch_requires_credentials() {
        assert!(requires_credentials(VenueId::Coinswitch));
        assert!(!requires_credentials(VenueId::Delta));
        assert!(!requires_credentials(VenueId::Binance));
    }
}
