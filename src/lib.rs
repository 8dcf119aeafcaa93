//! Tickerbot - exchange ticker snapshots relayed to Telegram on command.
//!
//! A single bot process hosts up to three *venues*, each owning a few chat
//! commands:
//!
//! - **Delta Exchange** (`/news`) - derivatives tickers; private order calls
//!   are signed with HMAC-SHA256.
//! - **CoinSwitch** (`/fetch`, `/test2`) - the futures ticker is fetched with
//!   an Ed25519-signed request and stored as a JSON snapshot on disk.
//! - **Binance** (`/binance`, `/symbol`) - public 24h ticker statistics.
//!
//! # Modules
//!
//! - [`domain`] - Venue identifiers and lenient numeric formatting
//! - [`port`] - The [`port::Venue`] trait the command router dispatches to
//! - [`adapter`] - Exchange clients (outbound), Telegram and CLI (inbound)
//! - [`infrastructure`] - Configuration, logging, and venue wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use tickerbot::adapter::outbound::binance::{format_ticker, BinanceClient, BinanceSettings};
//!
//! # async fn demo() -> tickerbot::error::Result<()> {
//! let settings = BinanceSettings::default();
//! let client = BinanceClient::new(&settings);
//! let ticker = client.ticker_24h("BTCUSDT").await?;
//! println!("{}", format_ticker("BTCUSDT", &ticker, &settings.web_url));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
