//! Handler for the `preview` command.

use crate::adapter::inbound::cli::command::PreviewArgs;
use crate::adapter::inbound::cli::output;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::{build_venue, Credentials};
use crate::infrastructure::config::settings::Config;

/// Run one venue command and print what the bot would reply.
pub async fn execute(config: &Config, args: &PreviewArgs) -> Result<()> {
    let credentials = Credentials::from_env();
    let venue = build_venue(args.venue, config, &credentials)?;

    let command = args.command.trim_start_matches('/').to_ascii_lowercase();
    if !venue.handles(&command) {
        return Err(Error::UnknownCommand(command));
    }

    let reply = venue.execute(&command, &args.args).await?;
    output::reply(args.venue, &command, &reply);
    Ok(())
}
