//! Telegram command handling.
//!
//! Parses chat messages into command invocations, routes them to the
//! enabled venues and replies in the originating chat.

mod auth;
mod bot;
mod command;
mod router;

pub use auth::{command_response_for_message, ChatPolicy};
pub use bot::{run_bot, send_message, TelegramSettings};
pub use command::{parse_command, CommandParseError, Invocation};
pub use router::CommandRouter;
