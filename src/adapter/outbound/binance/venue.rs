//! Binance chat commands.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use super::client::BinanceClient;
use super::dto::Ticker24h;
use super::format::format_ticker;
use super::settings::BinanceSettings;
use crate::domain::VenueId;
use crate::error::{Error, Result};
use crate::port::{CommandSpec, Venue};

const COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("binance", "Random Binance 24h ticker"),
    CommandSpec::new("symbol", "24h ticker for a symbol, e.g. /symbol BTCUSDT"),
];

pub const FETCH_FAILED: &str = "Failed to fetch data from Binance";
pub const SYMBOL_USAGE: &str = "Please provide a symbol. Usage: /symbol BTCUSDT";

/// Venue answering `/binance` and `/symbol`.
pub struct BinanceVenue {
    client: BinanceClient,
    web_url: String,
}

impl BinanceVenue {
    #[must_use]
    pub fn new(settings: &BinanceSettings) -> Self {
        Self {
            client: BinanceClient::new(settings),
            web_url: settings.web_url.clone(),
        }
    }

    async fn random(&self) -> String {
        let tickers = match self.client.ticker_24h_all().await {
            Ok(tickers) => tickers,
            Err(e) => {
                warn!(error = %e, "Error fetching Binance data");
                return FETCH_FAILED.to_string();
            }
        };

        let Some(ticker) = pick(&tickers) else {
            warn!("Binance returned no tickers");
            return FETCH_FAILED.to_string();
        };
        let symbol = ticker.symbol.clone().unwrap_or_else(|| "Unknown".into());
        info!(symbol = %symbol, "Selected symbol");
        self.render(&symbol, ticker)
    }

    async fn symbol(&self, args: &[String]) -> String {
        let Some(symbol) = args.first().map(|s| s.to_uppercase()) else {
            return SYMBOL_USAGE.to_string();
        };
        info!(symbol = %symbol, "Fetching data for symbol");

        match self.client.ticker_24h(&symbol).await {
            Ok(ticker) => self.render(&symbol, &ticker),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Error fetching symbol data");
                format!("Failed to fetch data for {symbol}")
            }
        }
    }

    fn render(&self, symbol: &str, ticker: &Ticker24h) -> String {
        debug!(?ticker, "Raw data");
        let message = format_ticker(symbol, ticker, &self.web_url);
        debug!(%message, "Formatted message");
        message
    }
}

fn pick(tickers: &[Ticker24h]) -> Option<&Ticker24h> {
    tickers.choose(&mut rand::thread_rng())
}

#[async_trait]
impl Venue for BinanceVenue {
    fn id(&self) -> VenueId {
        VenueId::Binance
    }

    fn commands(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    async fn execute(&self, command: &str, args: &[String]) -> Result<String> {
        match command {
            "binance" => Ok(self.random().await),
            "symbol" => Ok(self.symbol(args).await),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn symbol_without_argument_prints_usage() {
        let venue = BinanceVenue::new(&BinanceSettings::default());
        let reply = venue.execute("symbol", &[]).await.unwrap();
        assert_eq!(reply, SYMBOL_USAGE);
    }

    #[tokio::test]
    async fn unreachable_host_reports_failure_for_symbol() {
        let venue = BinanceVenue::new(&BinanceSettings {
            base_url: "http://127.0.0.1:9".into(),
            ..BinanceSettings::default()
        });
        let reply = venue
            .execute("symbol", &["btcusdt".to_string()])
            .await
            .unwrap();
        assert_eq!(reply, "Failed to fetch data for BTCUSDT");
    }

    #[tokio::test]
    async fn unreachable_host_reports_generic_failure() {
        let venue = BinanceVenue::new(&BinanceSettings {
            base_url: "http://127.0.0.1:9".into(),
            ..BinanceSettings::default()
        });
        assert_eq!(venue.execute("binance", &[]).await.unwrap(), FETCH_FAILED);
    }

    #[test]
    fn pick_from_empty_is_none() {
        assert!(pick(&[]).is_none());
    }
}
