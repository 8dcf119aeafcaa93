//! Exchange-agnostic domain logic.
//!
//! Venues hand back loosely-typed JSON where numbers may arrive as strings,
//! bare numbers, empty strings or nulls. [`number`] normalises those into
//! [`rust_decimal::Decimal`] and renders them for chat messages.

pub mod number;
pub mod venue;

pub use venue::VenueId;
