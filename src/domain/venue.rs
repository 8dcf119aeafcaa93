//! Venue identifiers.

use std::fmt;
use std::str::FromStr;

/// Exchanges the bot can relay tickers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenueId {
    /// Delta Exchange derivatives.
    Delta,
    /// CoinSwitch futures.
    Coinswitch,
    /// Binance public market data.
    Binance,
}

impl VenueId {
    pub const ALL: [Self; 3] = [Self::Delta, Self::Coinswitch, Self::Binance];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delta => "delta",
            Self::Coinswitch => "coinswitch",
            Self::Binance => "binance",
        }
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delta" => Ok(Self::Delta),
            "coinswitch" => Ok(Self::Coinswitch),
            "binance" => Ok(Self::Binance),
            other => Err(format!(
                "unknown venue `{other}` (use: delta, coinswitch, binance)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        for id in VenueId::ALL {
            assert_eq!(id.to_string().parse::<VenueId>().unwrap(), id);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Binance".parse::<VenueId>().unwrap(), VenueId::Binance);
        assert!("kraken".parse::<VenueId>().is_err());
    }
}
