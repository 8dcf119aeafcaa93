//! Binance public market data adapter.
//!
//! Uses the unauthenticated `data-api.binance.vision` mirror; no signing.

mod client;
mod dto;
mod format;
mod settings;
mod venue;

pub use client::BinanceClient;
pub use dto::Ticker24h;
pub use format::format_ticker;
pub use settings::{BinanceCredentials, BinanceSettings};
pub use venue::BinanceVenue;
