//! Handler for the `run` command.

use tracing::{info, warn};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::telegram::{run_bot, TelegramSettings};
use crate::domain::VenueId;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap::{build_router, requires_credentials, Credentials};
use crate::infrastructure::config::settings::Config;

/// Start the bot with the selected venues.
pub async fn execute(config: &Config, args: &RunArgs) -> Result<()> {
    let telegram = TelegramSettings::from_env()?;
    let policy = telegram.policy(config.telegram.restrict_to_chat)?;
    let credentials = Credentials::from_env();

    let venues = select_venues(config, &args.venues, &credentials);
    if venues.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "venues",
            reason: "no venue is enabled".to_string(),
        }
        .into());
    }

    let router = build_router(&venues, config, &credentials)?;
    print_startup(&telegram, &venues, &router.help_text());

    info!(venues = ?venues, "tickerbot starting");
    run_bot(&telegram, policy, config.telegram.register_commands, router).await?;
    info!("tickerbot stopped");
    Ok(())
}

/// Venues named on the command line are used as given. Otherwise every
/// enabled venue is used, skipping those whose credentials are missing.
fn select_venues(config: &Config, requested: &[VenueId], credentials: &Credentials) -> Vec<VenueId> {
    if !requested.is_empty() {
        let mut selected = Vec::with_capacity(requested.len());
        for venue in requested {
            if !selected.contains(venue) {
                selected.push(*venue);
            }
        }
        return selected;
    }

    config
        .enabled_venues()
        .into_iter()
        .filter(|venue| {
            let usable = !requires_credentials(*venue) || credentials.is_present(*venue);
            if !usable {
                match credentials.rejection(*venue) {
                    Some(reason) => {
                        warn!(venue = %venue, reason, "Credentials rejected, venue disabled for this run");
                    }
                    None => warn!(venue = %venue, "Credentials missing, venue disabled for this run"),
                }
            }
            usable
        })
        .collect()
}

fn print_startup(telegram: &TelegramSettings, venues: &[VenueId], help: &str) {
    let names: Vec<&str> = venues.iter().map(|v| v.as_str()).collect();
    output::section(&format!("tickerbot {}", env!("CARGO_PKG_VERSION")));
    output::key_value("Bot token", telegram.masked_token());
    output::key_value("Venues", names.join(", "));
    output::note(help);
}
