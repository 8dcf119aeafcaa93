//! Telegram command parsing.

/// A parsed `/command arg1 arg2` message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lower-cased command name without slash or `@bot` suffix.
    pub name: String,
    /// Bot named by a `/command@bot` suffix.
    pub mention: Option<String>,
    pub args: Vec<String>,
}

impl Invocation {
    /// Whether this command is meant for the bot called `username`.
    ///
    /// Unaddressed commands are for every bot. An unknown username accepts
    /// any mention.
    #[must_use]
    pub fn is_addressed_to(&self, username: Option<&str>) -> bool {
        match (self.mention.as_deref(), username) {
            (Some(mention), Some(username)) => mention.eq_ignore_ascii_case(username),
            _ => true,
        }
    }
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a command invocation.
pub fn parse_command(text: &str) -> Result<Invocation, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    let Some(raw_command) = raw_command.strip_prefix('/') else {
        return Err(CommandParseError::NotACommand);
    };

    let (name, mention) = match raw_command.split_once('@') {
        Some((head, bot)) => (head, Some(bot).filter(|b| !b.is_empty())),
        None => (raw_command, None),
    };

    Ok(Invocation {
        name: name.to_lowercase(),
        mention: mention.map(ToOwned::to_owned),
        args: parts.map(ToOwned::to_owned).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(name: &str, args: &[&str]) -> Invocation {
        Invocation {
            name: name.into(),
            mention: None,
            args: args.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn addressed(name: &str, bot: &str, args: &[&str]) -> Invocation {
        Invocation {
            mention: Some(bot.into()),
            ..invocation(name, args)
        }
    }

    #[test]
    fn parse_bare_command() {
        assert_eq!(parse_command("/news").unwrap(), invocation("news", &[]));
    }

    #[test]
    fn parse_command_with_args() {
        assert_eq!(
            parse_command("/symbol btcusdt extra").unwrap(),
            invocation("symbol", &["btcusdt", "extra"])
        );
    }

    #[test]
    fn parse_command_with_bot_mention() {
        assert_eq!(
            parse_command("/fetch@ticker_bot").unwrap(),
            addressed("fetch", "ticker_bot", &[])
        );
        assert_eq!(
            parse_command("/Symbol@Bot ETHUSDT").unwrap(),
            addressed("symbol", "Bot", &["ETHUSDT"])
        );
        assert_eq!(parse_command("/news@").unwrap(), invocation("news", &[]));
    }

    #[test]
    fn mention_must_name_this_bot() {
        let own = parse_command("/news@Ticker_Bot").unwrap();
        assert!(own.is_addressed_to(Some("ticker_bot")));

        let other = parse_command("/news@other_bot").unwrap();
        assert!(!other.is_addressed_to(Some("ticker_bot")));
        assert!(other.is_addressed_to(None));

        let bare = parse_command("/news").unwrap();
        assert!(bare.is_addressed_to(Some("ticker_bot")));
    }

    #[test]
    fn parse_surrounding_whitespace() {
        assert_eq!(
            parse_command("   /binance   \n").unwrap(),
            invocation("binance", &[])
        );
    }

    #[test]
    fn parse_not_a_command() {
        assert_eq!(parse_command("hello"), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command(""), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command("   "), Err(CommandParseError::NotACommand));
        assert_eq!(
            parse_command("news /news"),
            Err(CommandParseError::NotACommand)
        );
    }

    #[test]
    fn parse_slash_only() {
        assert_eq!(parse_command("/").unwrap(), invocation("", &[]));
    }
}
