//! Delta Exchange chat commands.

use async_trait::async_trait;
use tracing::{debug, info};

use super::client::DeltaClient;
use super::format::news_reply;
use super::settings::{DeltaCredentials, DeltaSettings};
use crate::domain::VenueId;
use crate::error::{Error, Result};
use crate::port::{CommandSpec, Venue};

const COMMANDS: &[CommandSpec] = &[CommandSpec::new(
    "news",
    "Latest Delta Exchange ticker snapshot",
)];

/// Venue answering `/news` from the first Delta ticker.
pub struct DeltaVenue {
    client: DeltaClient,
    web_url: String,
}

impl DeltaVenue {
    #[must_use]
    pub fn new(settings: &DeltaSettings, credentials: Option<DeltaCredentials>) -> Self {
        Self {
            client: DeltaClient::new(settings, credentials),
            web_url: settings.web_url.clone(),
        }
    }

    async fn news(&self) -> Result<String> {
        let tickers = self.client.tickers().await?;
        if tickers.is_empty() {
            info!("No ticker data found");
        }
        let message = news_reply(&tickers, &self.web_url);
        debug!(%message, "Fetched message");
        Ok(message)
    }
}

#[async_trait]
impl Venue for DeltaVenue {
    fn id(&self) -> VenueId {
        VenueId::Delta
    }

    fn commands(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    async fn execute(&self, command: &str, _args: &[String]) -> Result<String> {
        match command {
            "news" => self.news().await,
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}
