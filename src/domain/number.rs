//! Numeric field parsing and display.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder shown for absent or unparseable values.
pub const MISSING: &str = "N/A";

/// Parse a decimal from a raw API string.
///
/// Accepts plain and scientific notation. Blank input yields `None`.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}

/// Read a decimal out of a JSON string or number.
#[must_use]
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => parse_decimal(&n.to_string()),
        _ => None,
    }
}

/// Serde adapter for fields that may be a string, a number, or missing.
///
/// Use with `#[serde(default, deserialize_with = "lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

/// Render `value` with `dp` fractional digits through its nearest `f64`.
///
/// Ties round to even on the binary value, so `2.5` gives `2` and `0.125`
/// gives `0.12`. Exchange payloads are displayed as the float they encode.
fn render(value: Decimal, dp: u32) -> String {
    let dp = dp as usize;
    match value.to_f64() {
        Some(v) => format!("{v:.dp$}"),
        None => format!("{value:.dp$}"),
    }
}

/// Format with exactly `dp` fractional digits, or [`MISSING`].
#[must_use]
pub fn fixed(value: Option<Decimal>, dp: u32) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| render(v, dp))
}

/// Like [`fixed`] with a trailing `%`. Missing values get no suffix.
#[must_use]
pub fn percent(value: Option<Decimal>, dp: u32) -> String {
    match value {
        Some(_) => format!("{}%", fixed(value, dp)),
        None => MISSING.to_string(),
    }
}

/// Format with `dp` fractional digits and comma thousands separators.
#[must_use]
pub fn grouped(value: Decimal, dp: u32) -> String {
    let text = render(value, dp);
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
