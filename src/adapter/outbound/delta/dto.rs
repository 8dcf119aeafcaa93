//! Delta Exchange wire types.
//!
//! Every v2 response is wrapped in an envelope:
//! ```json
//! {"success":true,"result":[{"symbol":"BTCUSD","mark_price":"67012.5",...}]}
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::number::lenient;

#[derive(Debug, Deserialize)]
pub(crate) struct DeltaEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// One row of `GET /v2/tickers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeltaTicker {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    /// Open interest in USD.
    #[serde(default, deserialize_with = "lenient")]
    pub oi_value_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub mark_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient")]
    pub mark_change_24h: Option<Decimal>,
}

/// An order as reported by `/v2/orders`.
///
/// Only the commonly used fields are typed; the rest are kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaOrder {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    LimitOrder,
    MarketOrder,
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limit" | "limit_order" => Ok(Self::LimitOrder),
            "market" | "market_order" => Ok(Self::MarketOrder),
            other => Err(format!("unknown order type `{other}` (use: limit_order, market_order)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(format!("unknown side `{other}` (use: buy, sell)")),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Body of `POST /v2/orders`. Field order is the wire order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub order_type: OrderType,
    pub size: u64,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<String>,
    pub product_id: u64,
}

impl NewOrder {
    #[must_use]
    pub fn limit(product_id: u64, side: Side, size: u64, limit_price: impl Into<String>) -> Self {
        Self {
            order_type: OrderType::LimitOrder,
            size,
            side,
            limit_price: Some(limit_price.into()),
            product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn limit_order_serializes_in_wire_order() {
        let order = NewOrder::limit(16, Side::Buy, 3, "0.0005");
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"order_type":"limit_order","size":3,"side":"buy","limit_price":"0.0005","product_id":16}"#
        );
    }

    #[test]
    fn market_order_omits_price() {
        let order = NewOrder {
            order_type: OrderType::MarketOrder,
            size: 1,
            side: Side::Sell,
            limit_price: None,
            product_id: 27,
        };
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"order_type":"market_order","size":1,"side":"sell","product_id":27}"#
        );
    }

    #[test]
    fn ticker_accepts_string_and_numeric_fields() {
        let ticker: DeltaTicker = serde_json::from_str(
            r#"{"description":"Bitcoin Perpetual","symbol":"BTCUSD","oi_value_usd":"1500000.5","mark_price":67012.25,"mark_change_24h":null}"#,
        )
        .unwrap();
        assert_eq!(ticker.symbol.as_deref(), Some("BTCUSD"));
        assert_eq!(ticker.oi_value_usd, Some(dec!(1500000.5)));
        assert_eq!(ticker.mark_price, Some(dec!(67012.25)));
        assert_eq!(ticker.mark_change_24h, None);
    }

    #[test]
    fn order_keeps_unknown_fields() {
        let order: DeltaOrder = serde_json::from_str(
            r#"{"id":42,"product_id":1,"side":"buy","state":"open","order_type":"limit_order","size":3,"limit_price":"0.0005"}"#,
        )
        .unwrap();
        assert_eq!(order.id, Some(42));
        assert_eq!(order.state.as_deref(), Some("open"));
        assert_eq!(order.extra.get("size"), Some(&Value::from(3)));
    }

    #[test]
    fn side_and_type_parse_cli_spellings() {
        assert_eq!("BUY".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("limit".parse::<OrderType>().unwrap(), OrderType::LimitOrder);
        assert!("hold".parse::<Side>().is_err());
    }
}
