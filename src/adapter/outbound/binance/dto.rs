//! Binance wire types.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::number::lenient;

/// One row of `GET /api/v3/ticker/24hr`.
///
/// Prices and volumes arrive as strings, `count` as a number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub price_change: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub price_change_percent: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub high_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub low_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub quote_volume: Option<Decimal>,
    /// Number of trades, rendered verbatim.
    #[serde(default)]
    pub count: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_binance_row() {
        let raw = r#"{
            "symbol":"BTCUSDT","priceChange":"-94.99999800","priceChangePercent":"-95.960",
            "weightedAvgPrice":"0.29628482","prevClosePrice":"0.10002000","lastPrice":"4.00000200",
            "lastQty":"200.00000000","bidPrice":"4.00000000","bidQty":"100.00000000",
            "askPrice":"4.00000200","askQty":"100.00000000","openPrice":"99.00000000",
            "highPrice":"100.00000000","lowPrice":"0.10000000","volume":"8913.30000000",
            "quoteVolume":"15.30000000","openTime":1499783499040,"closeTime":1499869899040,
            "firstId":28385,"lastId":28460,"count":76
        }"#;
        let ticker: Ticker24h = serde_json::from_str(raw).unwrap();
        assert_eq!(ticker.symbol.as_deref(), Some("BTCUSDT"));
        assert_eq!(ticker.last_price, Some(dec!(4.000002)));
        assert_eq!(ticker.price_change_percent, Some(dec!(-95.96)));
        assert_eq!(ticker.count, Some(Value::from(76)));
    }
}
