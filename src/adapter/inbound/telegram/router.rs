//! Command routing across venues.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::command::Invocation;
use crate::port::{CommandSpec, Venue};

const BUILTINS: &[CommandSpec] = &[
    CommandSpec::new("start", "Show available commands"),
    CommandSpec::new("help", "Show available commands"),
];

/// Maps command names to the venue that answers them.
#[derive(Clone)]
pub struct CommandRouter {
    venues: Vec<Arc<dyn Venue>>,
}

impl CommandRouter {
    /// Build a router. When two venues claim the same command the first
    /// one wins.
    #[must_use]
    pub fn new(venues: Vec<Arc<dyn Venue>>) -> Self {
        let mut seen: Vec<&str> = BUILTINS.iter().map(|c| c.name).collect();
        for venue in &venues {
            for spec in venue.commands() {
                if seen.contains(&spec.name) {
                    warn!(
                        venue = %venue.id(),
                        command = spec.name,
                        "Command already registered, ignoring duplicate"
                    );
                } else {
                    seen.push(spec.name);
                }
            }
        }
        Self { venues }
    }

    /// Venue commands followed by the built-ins.
    #[must_use]
    pub fn commands(&self) -> Vec<CommandSpec> {
        let mut commands: Vec<CommandSpec> = Vec::new();
        for spec in self.venues.iter().flat_map(|v| v.commands().iter()) {
            if !commands.iter().any(|c| c.name == spec.name) && !is_builtin(spec.name) {
                commands.push(*spec);
            }
        }
        commands.push(BUILTINS[1]);
        commands
    }

    /// Text returned by `/start` and `/help`.
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut text = String::from("📋 Commands\n");
        for spec in self.commands() {
            text.push_str(&format!("\n/{} - {}", spec.name, spec.description));
        }
        text
    }

    fn venue_for(&self, command: &str) -> Option<&Arc<dyn Venue>> {
        self.venues.iter().find(|v| v.handles(command))
    }

    /// Run an invocation. Returns `None` for commands nobody handles.
    pub async fn dispatch(&self, invocation: &Invocation) -> Option<String> {
        if is_builtin(&invocation.name) {
            return Some(self.help_text());
        }

        let Some(venue) = self.venue_for(&invocation.name) else {
            debug!(command = %invocation.name, "Ignoring unknown command");
            return None;
        };

        info!(venue = %venue.id(), command = %invocation.name, "Running command");
        match venue.execute(&invocation.name, &invocation.args).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!(
                    venue = %venue.id(),
                    command = %invocation.name,
                    error = %e,
                    "Command failed"
                );
                Some(format!("An error occurred: {e}"))
            }
        }
    }
}

fn is_builtin(name: &str) -> bool {
    BUILTINS.iter().any(|c| c.name == name)
}
