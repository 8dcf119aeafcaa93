//! CoinSwitch futures adapter.
//!
//! Requests are authenticated with an Ed25519 signature over
//! `method + endpoint_with_params + epoch_ms`. `/fetch` stores the all-pairs
//! ticker as a flat JSON snapshot; `/test2` reports a random pair from the
//! latest snapshot.

mod client;
mod dto;
mod format;
mod settings;
mod snapshot;
mod venue;

pub use client::{endpoint_with_params, signature_message, AuthHeaders, CoinswitchClient};
pub use dto::FuturesTicker;
pub use format::{format_fetch_summary, format_ticker};
pub use settings::{CoinswitchCredentials, CoinswitchSettings, SECRET_KEY_ENV};
pub use snapshot::{build_entries, SnapshotEntry, SnapshotStore};
pub use venue::CoinswitchVenue;
