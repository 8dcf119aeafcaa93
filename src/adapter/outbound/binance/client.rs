//! Binance public REST client.

use reqwest::Client as HttpClient;
use tracing::{debug, info};

use super::dto::Ticker24h;
use super::settings::BinanceSettings;
use crate::adapter::outbound::http::read_json;
use crate::error::Result;

const VENUE: &str = "binance";
const TICKER_PATH: &str = "/api/v3/ticker/24hr";

/// HTTP client for Binance public market data.
pub struct BinanceClient {
    http: HttpClient,
    base_url: String,
}

impl BinanceClient {
    #[must_use]
    pub fn new(settings: &BinanceSettings) -> Self {
        Self {
            http: settings.http.build_client(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn ticker_url(&self, symbol: Option<&str>) -> String {
        match symbol {
            Some(symbol) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("symbol", symbol)
                    .finish();
                format!("{}{TICKER_PATH}?{query}", self.base_url)
            }
            None => format!("{}{TICKER_PATH}", self.base_url),
        }
    }

    /// 24h ticker for every symbol.
    pub async fn ticker_24h_all(&self) -> Result<Vec<Ticker24h>> {
        let url = self.ticker_url(None);
        info!(url = %url, "Fetching 24h tickers");
        let tickers: Vec<Ticker24h> = read_json(VENUE, self.http.get(&url).send().await?).await?;
        info!(count = tickers.len(), "Fetched 24h tickers");
        Ok(tickers)
    }

    /// 24h ticker for one symbol.
    pub async fn ticker_24h(&self, symbol: &str) -> Result<Ticker24h> {
        let url = self.ticker_url(Some(symbol));
        debug!(url = %url, "Fetching 24h ticker");
        let ticker: Ticker24h = read_json(VENUE, self.http.get(&url).send().await?).await?;
        info!(symbol, "Fetched 24h ticker");
        Ok(ticker)
    }
}
