//! CoinSwitch futures ticker fields.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::snapshot::SnapshotEntry;
use crate::domain::number::lenient;

/// The ticker fields reported by `/test2`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FuturesTicker {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub mark_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub price_24h_pcnt: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub low_price_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub high_price_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub base_asset_volume_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub funding_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub open_interest: Option<Decimal>,
}

impl FuturesTicker {
    /// Read the ticker fields out of a snapshot entry.
    ///
    /// A non-string `symbol` is treated as absent.
    pub fn from_entry(entry: &SnapshotEntry) -> serde_json::Result<Self> {
        let mut entry = entry.clone();
        if !matches!(entry.get("symbol"), Some(Value::String(_)) | None) {
            entry.remove("symbol");
        }
        serde_json::from_value(Value::Object(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn reads_typed_fields_and_ignores_the_rest() {
        let entry = json!({
            "id": 3,
            "symbol": "BTCUSDT",
            "last_price": "67000.12345",
            "funding_rate": 0.0001,
            "open_interest": "",
            "extra": {"nested": true}
        });
        let ticker = FuturesTicker::from_entry(entry.as_object().unwrap()).unwrap();
        assert_eq!(ticker.symbol.as_deref(), Some("BTCUSDT"));
        assert_eq!(ticker.last_price, Some(dec!(67000.12345)));
        assert_eq!(ticker.funding_rate, Some(dec!(0.0001)));
        assert_eq!(ticker.open_interest, None);
        assert_eq!(ticker.mark_price, None);
    }

    #[test]
    fn non_string_symbol_is_absent() {
        let entry = json!({"symbol": 7});
        let ticker = FuturesTicker::from_entry(entry.as_object().unwrap()).unwrap();
        assert_eq!(ticker.symbol, None);
    }
}
