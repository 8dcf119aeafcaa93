//! CLI module graph.

pub mod check;
pub mod command;
pub mod delta;
pub mod output;
pub mod preview;
pub mod run;

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use command::{CheckCommand, Commands};

/// Run the parsed subcommand against a loaded config.
pub async fn execute(command: Commands, config_path: &Path, config: Config) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(&config, &args).await,
        Commands::Check(CheckCommand::Config) => check::execute_config(config_path, &config),
        Commands::Check(CheckCommand::Telegram) => check::execute_telegram().await,
        Commands::Preview(args) => preview::execute(&config, &args).await,
        Commands::Delta(command) => delta::execute(&config, command).await,
    }
}
