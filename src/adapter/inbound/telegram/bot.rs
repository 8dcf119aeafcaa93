//! Telegram long-polling loop.
//!
//! Registers the router's commands with Telegram so they appear in the "/"
//! menu, then answers each command in the chat that sent it until Ctrl-C.

use std::fmt;
use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use super::auth::{command_response_for_message, ChatPolicy};
use super::router::CommandRouter;
use crate::error::{ConfigError, Result};

pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";
/// Older name for [`CHAT_ID_ENV`], still honoured.
pub const LEGACY_CHAT_ID_ENV: &str = "CHAT_ID";

/// Bot credentials and target chat.
#[derive(Clone)]
pub struct TelegramSettings {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// The single chat the bot reports to.
    pub chat_id: Option<i64>,
}

impl TelegramSettings {
    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` (or `CHAT_ID`).
    ///
    /// A missing token is an error; a missing or non-numeric chat id is
    /// `None`.
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var(BOT_TOKEN_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingField {
                field: BOT_TOKEN_ENV,
            })?;
        let chat_id = std::env::var(CHAT_ID_ENV)
            .or_else(|_| std::env::var(LEGACY_CHAT_ID_ENV))
            .ok()
            .and_then(|s| s.trim().parse().ok());
        Ok(Self { bot_token, chat_id })
    }

    /// Token with everything but the bot id masked.
    #[must_use]
    pub fn masked_token(&self) -> String {
        match self.bot_token.split_once(':') {
            Some((bot_id, _)) => format!("{bot_id}:****"),
            None => "****".to_string(),
        }
    }

    /// Chat policy for incoming commands.
    pub fn policy(&self, restrict_to_chat: bool) -> Result<ChatPolicy> {
        if !restrict_to_chat {
            return Ok(ChatPolicy::Any);
        }
        let chat_id = self.chat_id.ok_or(ConfigError::MissingField {
            field: CHAT_ID_ENV,
        })?;
        Ok(ChatPolicy::Only(ChatId(chat_id)))
    }
}

impl fmt::Debug for TelegramSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramSettings")
            .field("bot_token", &self.masked_token())
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Send one message to the configured chat.
pub async fn send_message(settings: &TelegramSettings, text: &str) -> Result<()> {
    let chat_id = settings.chat_id.ok_or(ConfigError::MissingField {
        field: CHAT_ID_ENV,
    })?;
    let bot = Bot::new(&settings.bot_token);
    bot.send_message(ChatId(chat_id), text).await?;
    info!(chat_id, "Message sent to Telegram");
    Ok(())
}

/// Answer commands until the process receives Ctrl-C.
pub async fn run_bot(
    settings: &TelegramSettings,
    policy: ChatPolicy,
    register_commands: bool,
    router: CommandRouter,
) -> Result<()> {
    let bot = Bot::new(&settings.bot_token);
    let me = bot.get_me().await?;
    let username: Option<Arc<str>> = me.user.username.as_deref().map(Arc::from);

    if register_commands {
        if let Err(e) = register_bot_commands(&bot, &router).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    let commands: Vec<String> = router
        .commands()
        .iter()
        .map(|c| format!("/{}", c.name))
        .collect();
    info!(
        commands = %commands.join(" "),
        ?policy,
        username = username.as_deref().unwrap_or("unknown"),
        "Telegram command listener started"
    );

    let router = Arc::new(router);
    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let router = Arc::clone(&router);
        let username = username.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            let response = command_response_for_message(
                text,
                msg.chat.id,
                policy,
                username.as_deref(),
                &router,
            )
            .await;
            if let Some(response) = response {
                info!(chat_id = msg.chat.id.0, "Replying to command");
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;

    info!("Telegram command listener stopped");
    Ok(())
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(
    bot: &Bot,
    router: &CommandRouter,
) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = router
        .commands()
        .into_iter()
        .map(|spec| BotCommand::new(spec.name, spec.description))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
