//! Venue port.
//!
//! A venue owns a set of chat commands and turns each invocation into the
//! text that should be sent back to the chat.

use async_trait::async_trait;

use crate::domain::VenueId;
use crate::error::Result;

/// A chat command a venue answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name without the leading slash.
    pub name: &'static str,
    /// One-line description for the command menu.
    pub description: &'static str,
}

impl CommandSpec {
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// An exchange-backed command handler.
///
/// Implementations return `Ok` with user-facing text for expected outcomes,
/// including "nothing found" replies. `Err` is reserved for failures the
/// dispatcher should report generically.
#[async_trait]
pub trait Venue: Send + Sync {
    /// Which exchange this venue talks to.
    fn id(&self) -> VenueId;

    /// Commands handled by this venue.
    fn commands(&self) -> &'static [CommandSpec];

    /// Run `command` (one of [`Self::commands`]) with its arguments.
    async fn execute(&self, command: &str, args: &[String]) -> Result<String>;

    /// Whether this venue handles `command`.
    fn handles(&self, command: &str) -> bool {
        self.commands().iter().any(|spec| spec.name == command)
    }
}
