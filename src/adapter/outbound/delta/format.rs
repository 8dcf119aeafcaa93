//! `/news` message formatting.

use super::dto::DeltaTicker;
use crate::domain::number::{grouped, MISSING};

/// Reply sent when the ticker endpoint returns no rows.
pub const NO_NEWS: &str = "No news available.";

/// The `/news` reply for a ticker list: the first row, or [`NO_NEWS`].
#[must_use]
pub fn news_reply(tickers: &[DeltaTicker], web_url: &str) -> String {
    tickers
        .first()
        .map_or_else(|| NO_NEWS.to_string(), |ticker| format_news(ticker, web_url))
}

/// Link to a product's futures trading page.
///
/// The underlying is the symbol minus its 3-character quote suffix, so
/// `BTCUSD` links to `.../trade/BTC/BTCUSD`.
#[must_use]
pub fn product_link(web_url: &str, symbol: &str) -> String {
    let chars = symbol.chars().count();
    let base: String = if chars > 3 {
        symbol.chars().take(chars - 3).collect()
    } else {
        symbol.to_string()
    };
    format!(
        "{}/app/futures/trade/{base}/{symbol}",
        web_url.trim_end_matches('/')
    )
}

/// Render a ticker as the `/news` reply.
#[must_use]
pub fn format_news(ticker: &DeltaTicker, web_url: &str) -> String {
    let name = ticker.description.as_deref().unwrap_or(MISSING);
    let symbol = ticker.symbol.as_deref().filter(|s| !s.is_empty());

    let mut message = format!("🚀 {name} ({})\n", symbol.unwrap_or(MISSING));
    if let Some(symbol) = symbol {
        message.push_str(&format!("🔗 {}\n", product_link(web_url, symbol)));
    }

    match (ticker.oi_value_usd, ticker.mark_price) {
        (Some(market_cap), Some(liquidity)) => message.push_str(&format!(
            "\n💰 Market Cap: ${}   💧 Liquidity: ${}",
            grouped(market_cap, 2),
            grouped(liquidity, 2)
        )),
        (Some(market_cap), None) => {
            message.push_str(&format!("\n💰 Market Cap: ${}", grouped(market_cap, 2)));
        }
        (None, Some(liquidity)) => {
            message.push_str(&format!("\n💧 Liquidity: ${}", grouped(liquidity, 2)));
        }
        (None, None) => {}
    }

    if let Some(vol) = ticker.mark_change_24h {
        message.push_str(&format!("\n\n📈 24h Vol: ${}", grouped(vol, 2)));
    }

    message
}
