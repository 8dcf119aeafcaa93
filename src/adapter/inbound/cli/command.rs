//! Command-line interface definitions.
//!
//! The bot runs in the foreground with `run`; the other subcommands check the
//! setup or exercise a venue without going through Telegram.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapter::outbound::delta::{OrderType, Side};
use crate::domain::VenueId;

pub const DEFAULT_CONFIG: &str = "config.toml";

/// Telegram bot relaying exchange ticker snapshots
#[derive(Parser, Debug)]
#[command(name = "tickerbot")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it does not exist).
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the Telegram bot (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Run a venue command and print the reply instead of sending it
    Preview(PreviewArgs),

    /// Signed Delta Exchange order calls
    #[command(subcommand)]
    Delta(DeltaCommand),
}

impl Commands {
    /// Log overrides carried by the subcommand, if any.
    #[must_use]
    pub fn log_overrides(&self) -> (Option<&str>, bool) {
        match self {
            Self::Run(args) => (args.log_level.as_deref(), args.json_logs),
            _ => (None, false),
        }
    }
}

/// Arguments for `run`.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Only host these venues (repeatable). Defaults to every enabled venue.
    #[arg(long = "venue", value_name = "VENUE")]
    pub venues: Vec<VenueId>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}

/// Subcommands for `check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and report credentials.
    Config,
    /// Send a test message to the configured chat.
    Telegram,
}

/// Arguments for `preview`.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Venue hosting the command (delta, coinswitch, binance).
    pub venue: VenueId,

    /// Command name without the leading slash, e.g. `news`.
    pub command: String,

    /// Command arguments, e.g. a symbol.
    pub args: Vec<String>,
}

/// Subcommands for `delta`.
#[derive(Subcommand, Debug)]
pub enum DeltaCommand {
    /// List orders for a product.
    Orders(DeltaOrdersArgs),
    /// Place an order.
    Place(DeltaPlaceArgs),
}

#[derive(Parser, Debug)]
pub struct DeltaOrdersArgs {
    #[arg(long)]
    pub product_id: u64,

    /// Order state filter.
    #[arg(long, default_value = "open")]
    pub state: String,
}

#[derive(Parser, Debug)]
pub struct DeltaPlaceArgs {
    #[arg(long)]
    pub product_id: u64,

    /// buy or sell
    #[arg(long)]
    pub side: Side,

    /// Number of contracts.
    #[arg(long)]
    pub size: u64,

    /// Limit price, sent as given. Required for limit orders.
    #[arg(long)]
    pub limit_price: Option<String>,

    /// limit_order or market_order
    #[arg(long, default_value = "limit_order")]
    pub order_type: OrderType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["tickerbot", "run"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG));
        assert_eq!(cli.command.log_overrides(), (None, false));
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.venues.is_empty());
    }

    #[test]
    fn parse_run_log_overrides() {
        let cli =
            Cli::try_parse_from(["tickerbot", "run", "--log-level", "debug", "--json-logs"])
                .unwrap();
        assert_eq!(cli.command.log_overrides(), (Some("debug"), true));
    }

    #[test]
    fn parse_repeated_venues() {
        let cli = Cli::try_parse_from([
            "tickerbot",
            "run",
            "--venue",
            "binance",
            "--venue",
            "Delta",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.venues, vec![VenueId::Binance, VenueId::Delta]);
    }

    #[test]
    fn unknown_venue_is_rejected() {
        assert!(Cli::try_parse_from(["tickerbot", "run", "--venue", "kraken"]).is_err());
    }

    #[test]
    fn parse_check_subcommands() {
        let cli =
            Cli::try_parse_from(["tickerbot", "-c", "bot.toml", "check", "telegram"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("bot.toml"));
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Telegram)
        ));
    }

    #[test]
    fn parse_preview_with_args() {
        let cli = Cli::try_parse_from(["tickerbot", "preview", "binance", "symbol", "ETHUSDT"])
            .unwrap();
        let Commands::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.venue, VenueId::Binance);
        assert_eq!(args.command, "symbol");
        assert_eq!(args.args, vec!["ETHUSDT".to_string()]);
    }

    #[test]
    fn parse_delta_place() {
        let cli = Cli::try_parse_from([
            "tickerbot",
            "delta",
            "place",
            "--product-id",
            "27",
            "--side",
            "buy",
            "--size",
            "1",
            "--limit-price",
            "59000",
        ])
        .unwrap();
        let Commands::Delta(DeltaCommand::Place(args)) = cli.command else {
            panic!("expected delta place");
        };
        assert_eq!(args.product_id, 27);
        assert_eq!(args.side, Side::Buy);
        assert_eq!(args.order_type, OrderType::LimitOrder);
        assert_eq!(args.limit_price.as_deref(), Some("59000"));
    }

    #[test]
    fn parse_delta_orders_default_state() {
        let cli = Cli::try_parse_from(["tickerbot", "delta", "orders", "--product-id", "27"])
            .unwrap();
        let Commands::Delta(DeltaCommand::Orders(args)) = cli.command else {
            panic!("expected delta orders");
        };
        assert_eq!(args.state, "open");
    }
}
