//! Telegram bot configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram behaviour from the `[telegram]` section.
///
/// The bot token and chat id are read from the environment, never from the
/// config file.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Only answer commands from `TELEGRAM_CHAT_ID`.
    #[serde(default)]
    pub restrict_to_chat: bool,
    /// Publish the command list to Telegram's "/" menu at startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            restrict_to_chat: false,
            register_commands: default_true(),
        }
    }
}
