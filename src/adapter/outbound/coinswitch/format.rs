//! CoinSwitch reply formatting.

use std::path::Path;

use super::dto::FuturesTicker;
use crate::domain::number::{fixed, percent, MISSING};

/// Render one pair for `/test2`.
#[must_use]
pub fn format_ticker(ticker: &FuturesTicker, web_url: &str) -> String {
    let symbol = ticker.symbol.as_deref().unwrap_or(MISSING);
    let web_url = web_url.trim_end_matches('/');

    format!(
        "🚀 {symbol}\n\
         🔗 {web_url}/trade/futures/{symbol}\n\
         \n\
         💰 Last Price: ${}   📊 Mark Price: ${}\n\
         📈 24h Change: {}\n\
         📊 24h Low: ${}   📈 24h High: ${}\n\
         💧 24h Volume: {}\n\
         🏦 Funding Rate: {}\n\
         📊 Open Interest: {}",
        fixed(ticker.last_price, 4),
        fixed(ticker.mark_price, 4),
        percent(ticker.price_24h_pcnt, 2),
        fixed(ticker.low_price_24h, 4),
        fixed(ticker.high_price_24h, 4),
        fixed(ticker.base_asset_volume_24h, 0),
        fixed(ticker.funding_rate, 6),
        fixed(ticker.open_interest, 0),
    )
}

/// Reply for a completed `/fetch`.
#[must_use]
pub fn format_fetch_summary(path: &Path, count: usize) -> String {
    let file = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    format!("✅ Data fetched and stored with IDs!\n📁 File: {file}\n📊 Total currencies: {count}")
}
