//! Operator-facing terminal output.
//!
//! Lines are built by pure functions and printed by thin wrappers. Failures
//! go to stderr. Bot replies are printed verbatim so `preview` shows exactly
//! what Telegram would receive.

use std::fmt::Display;

use crate::domain::VenueId;

const LABEL_WIDTH: usize = 12;
const RULE: &str = "────────────────────────────────────────";

/// Outcome marker at the start of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Ok,
    Warn,
    Fail,
}

impl Mark {
    const fn symbol(self) -> char {
        match self {
            Self::Ok => '✓',
            Self::Warn => '⚠',
            Self::Fail => '✗',
        }
    }
}

#[must_use]
pub fn heading(title: &str) -> String {
    format!("\n{title}\n{RULE}")
}

/// `label` padded to a fixed column, then `value`.
#[must_use]
pub fn field(label: &str, value: impl Display) -> String {
    format!("{label:<width$} {value}", width = LABEL_WIDTH)
}

#[must_use]
pub fn status(mark: Mark, message: &str) -> String {
    format!("{} {message}", mark.symbol())
}

/// A chat reply under a `/command (venue)` header.
#[must_use]
pub fn reply_block(venue: VenueId, command: &str, text: &str) -> String {
    format!("/{command} ({venue})\n{RULE}\n{text}")
}

pub fn section(title: &str) {
    println!("{}", heading(title));
}

pub fn key_value(label: &str, value: impl Display) {
    println!("{}", field(label, value));
}

/// One venue's line in a status listing.
pub fn venue(venue: VenueId, state: &str) {
    key_value(venue.as_str(), state);
}

pub fn ok(message: &str) {
    println!("{}", status(Mark::Ok, message));
}

pub fn warn(message: &str) {
    println!("{}", status(Mark::Warn, message));
}

pub fn error(message: &str) {
    eprintln!("{}", status(Mark::Fail, message));
}

/// Print a message as-is.
pub fn note(message: &str) {
    println!("{message}");
}

pub fn reply(venue: VenueId, command: &str, text: &str) {
    println!("{}", reply_block(venue, command, text));
}
