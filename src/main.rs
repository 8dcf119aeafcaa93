use clap::Parser;
use tracing::error;

use tickerbot::adapter::inbound::cli::command::Cli;
use tickerbot::adapter::inbound::cli::{self, output};
use tickerbot::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let mut config = match Config::load_or_default(&args.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    let (level, json) = args.command.log_overrides();
    config.logging.apply_overrides(level, json);
    config.init_logging();

    if let Err(e) = cli::execute(args.command, &args.config, config).await {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
