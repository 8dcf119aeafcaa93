//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`Venue`] - A source of chat commands backed by one exchange

pub mod venue;

pub use venue::{CommandSpec, Venue};
