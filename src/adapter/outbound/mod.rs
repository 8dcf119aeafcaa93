//! Outbound adapters (driven side): exchange REST clients.

pub mod binance;
pub mod coinswitch;
pub mod delta;
pub mod http;
pub mod signing;
