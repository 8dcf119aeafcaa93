//! Diagnostic command handlers.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::telegram::{send_message, TelegramSettings};
use crate::domain::VenueId;
use crate::error::Result;
use crate::infrastructure::bootstrap::{requires_credentials, Credentials};
use crate::infrastructure::config::settings::Config;

const TEST_MESSAGE: &str = "✅ tickerbot test message";

/// Report the effective configuration and which credentials are present.
pub fn execute_config(path: &Path, config: &Config) -> Result<()> {
    output::section("Configuration Check");
    if path.exists() {
        output::key_value("Config", path.display());
    } else {
        output::key_value("Config", format!("{} (not found, defaults)", path.display()));
    }
    output::ok("Configuration is valid");

    output::section("Venues");
    let credentials = Credentials::from_env();
    for venue in VenueId::ALL {
        output::venue(venue, &venue_status(config, venue, &credentials));
    }

    output::section("Telegram");
    match TelegramSettings::from_env() {
        Ok(telegram) => {
            output::key_value("Bot token", telegram.masked_token());
            match telegram.chat_id {
                Some(chat_id) => output::key_value("Chat ID", chat_id),
                None if config.telegram.restrict_to_chat => {
                    output::warn("restrict_to_chat is set but TELEGRAM_CHAT_ID is missing");
                }
                None => output::key_value("Chat ID", "not set"),
            }
        }
        Err(e) => output::warn(&e.to_string()),
    }
    output::key_value("Restricted", config.telegram.restrict_to_chat);

    Ok(())
}

fn venue_status(config: &Config, venue: VenueId, credentials: &Credentials) -> String {
    if !config.is_enabled(venue) {
        return "disabled".to_string();
    }
    if let Some(reason) = credentials.rejection(venue) {
        return format!("enabled, credentials INVALID ({reason})");
    }
    match (credentials.is_present(venue), requires_credentials(venue)) {
        (true, _) => "enabled, credentials set".to_string(),
        (false, true) => "enabled, credentials MISSING".to_string(),
        (false, false) => "enabled, public access".to_string(),
    }
}

/// Send a test message to the configured chat.
pub async fn execute_telegram() -> Result<()> {
    let telegram = TelegramSettings::from_env()?;
    output::section("Telegram Check");
    output::key_value("Bot token", telegram.masked_token());

    send_message(&telegram, TEST_MESSAGE).await?;
    output::ok("Test message sent, check Telegram for it");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_venue_status() {
        let config = Config::parse_toml("[binance]\nenabled = false\n").unwrap();
        assert_eq!(
            venue_status(&config, VenueId::Binance, &Credentials::default()),
            "disabled"
        );
    }

    #[test]
    fn missing_required_credentials_flagged() {
        let config = Config::default();
        assert_eq!(
            venue_status(&config, VenueId::Coinswitch, &Credentials::default()),
            "enabled, credentials MISSING"
        );
        assert_eq!(
            venue_status(&config, VenueId::Delta, &Credentials::default()),
            "enabled, public access"
        );
    }

    #[test]
    fn rejected_credentials_reported_per_venue() {
        let credentials = Credentials {
            coinswitch_error: Some("secret key is not valid hex".into()),
            ..Credentials::default()
        };
        let config = Config::default();
        assert_eq!(
            venue_status(&config, VenueId::Coinswitch, &credentials),
            "enabled, credentials INVALID (secret key is not valid hex)"
        );
        assert_eq!(
            venue_status(&config, VenueId::Binance, &credentials),
            "enabled, public access"
        );
    }
}
