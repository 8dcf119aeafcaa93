//! Delta Exchange adapter.
//!
//! Private endpoints are authenticated with an HMAC-SHA256 signature over
//! `method + timestamp + path + query_string + payload`. The public ticker
//! endpoint backs the `/news` command.

mod client;
mod dto;
mod format;
mod settings;
mod venue;

pub use client::{signature_payload, DeltaClient, SignedHeaders};
pub use dto::{DeltaOrder, DeltaTicker, NewOrder, OrderType, Side};
pub use format::{format_news, news_reply, product_link, NO_NEWS};
pub use settings::{DeltaCredentials, DeltaSettings, API_KEY_ENV, API_SECRET_ENV};
pub use venue::DeltaVenue;
