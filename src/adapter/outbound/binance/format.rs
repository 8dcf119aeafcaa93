//! Binance reply formatting.

use serde_json::Value;

use super::dto::Ticker24h;
use crate::domain::number::{fixed, percent, MISSING};

/// Render a 24h ticker. `symbol` is used for the header and links.
#[must_use]
pub fn format_ticker(symbol: &str, ticker: &Ticker24h, web_url: &str) -> String {
    let count = match &ticker.count {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => MISSING.to_string(),
        Some(other) => other.to_string(),
    };
    let base_asset = symbol.replace("USDT", "");

    format!(
        "🚀 {symbol} (Binance)\n\
         🔗 {}/en/trade/{symbol}\n\
         \n\
         💰 Last Price: ${}\n\
         📈 24h Change: {} (${})\n\
         📊 24h High: ${}   📉 24h Low: ${}\n\
         💧 24h Volume: {} {base_asset}\n\
         💵 Quote Volume: ${}\n\
         🔄 Trade Count: {count}",
        web_url.trim_end_matches('/'),
        fixed(ticker.last_price, 4),
        percent(ticker.price_change_percent, 2),
        fixed(ticker.price_change, 4),
        fixed(ticker.high_price, 4),
        fixed(ticker.low_price, 4),
        fixed(ticker.volume, 0),
        fixed(ticker.quote_volume, 0),
    )
}
