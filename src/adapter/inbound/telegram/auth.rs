//! Authorization for Telegram command handling.

use teloxide::types::ChatId;
use tracing::{debug, warn};

use super::command::parse_command;
use super::router::CommandRouter;

/// Which chats may issue commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPolicy {
    /// Answer whichever chat sent the command.
    Any,
    /// Answer only the configured chat.
    Only(ChatId),
}

impl ChatPolicy {
    fn allows(self, incoming_chat: ChatId) -> bool {
        match self {
            Self::Any => true,
            Self::Only(allowed) if allowed == incoming_chat => true,
            Self::Only(_) => {
                warn!(
                    chat_id = incoming_chat.0,
                    "Ignoring Telegram message from unauthorized chat"
                );
                false
            }
        }
    }
}

/// Process a message and return a response if it's an authorized command.
///
/// Returns `None` for messages from unauthorized chats, messages that are not
/// commands, commands addressed to another bot, and commands no venue
/// handles. `bot_username` is this bot's Telegram username, if known.
pub async fn command_response_for_message(
    text: &str,
    incoming_chat: ChatId,
    policy: ChatPolicy,
    bot_username: Option<&str>,
    router: &CommandRouter,
) -> Option<String> {
    if !policy.allows(incoming_chat) {
        return None;
    }

    let invocation = parse_command(text).ok()?;
    if !invocation.is_addressed_to(bot_username) {
        debug!(
            command = %invocation.name,
            mention = ?invocation.mention,
            "Ignoring command addressed to another bot"
        );
        return None;
    }
    router.dispatch(&invocation).await
}
