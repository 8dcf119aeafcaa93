//! CoinSwitch chat commands.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::client::CoinswitchClient;
use super::dto::FuturesTicker;
use super::format::{format_fetch_summary, format_ticker};
use super::settings::{CoinswitchCredentials, CoinswitchSettings};
use super::snapshot::{build_entries, SnapshotEntry, SnapshotStore};
use crate::domain::VenueId;
use crate::error::{Error, Result};
use crate::port::{CommandSpec, Venue};

const COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("fetch", "Fetch and store the CoinSwitch futures ticker"),
    CommandSpec::new("test2", "Show a random pair from the stored ticker"),
];

pub const NO_SNAPSHOT: &str = "No stored data found. Please use /fetch to get data first.";
pub const EMPTY_SNAPSHOT: &str = "No token data found in stored file.";

/// Venue answering `/fetch` and `/test2`.
pub struct CoinswitchVenue {
    client: CoinswitchClient,
    store: SnapshotStore,
    exchange: String,
    web_url: String,
}

impl CoinswitchVenue {
    #[must_use]
    pub fn new(settings: &CoinswitchSettings, credentials: CoinswitchCredentials) -> Self {
        Self {
            client: CoinswitchClient::new(settings, credentials),
            store: SnapshotStore::new(settings.snapshot_dir.clone()),
            exchange: settings.exchange.clone(),
            web_url: settings.web_url.clone(),
        }
    }

    async fn fetch(&self) -> Result<String> {
        let document = self.client.all_pairs_ticker(&self.exchange).await?;
        let entries = build_entries(&document);
        let path = self.store.write(&entries)?;
        info!(
            path = %path.display(),
            count = entries.len(),
            "Data with IDs stored"
        );
        Ok(format_fetch_summary(&path, entries.len()))
    }

    fn random_pair(&self) -> Result<String> {
        let Some(path) = self.store.latest()? else {
            return Ok(NO_SNAPSHOT.to_string());
        };
        info!(path = %path.display(), "Reading snapshot");

        let entries = SnapshotStore::read(&path)?;
        let Some(entry) = choose_entry(&entries, &mut rand::thread_rng()) else {
            return Ok(EMPTY_SNAPSHOT.to_string());
        };

        let ticker = FuturesTicker::from_entry(entry)?;
        info!(symbol = ticker.symbol.as_deref().unwrap_or_default(), "Selected currency");
        let message = format_ticker(&ticker, &self.web_url);
        debug!(%message, "Fetched message");
        Ok(message)
    }
}

/// Pick an entry uniformly at random.
pub fn choose_entry<'a, R: Rng + ?Sized>(
    entries: &'a [SnapshotEntry],
    rng: &mut R,
) -> Option<&'a SnapshotEntry> {
    entries.choose(rng)
}

#[async_trait]
impl Venue for CoinswitchVenue {
    fn id(&self) -> VenueId {
        VenueId::Coinswitch
    }

    fn commands(&self) -> &'static [CommandSpec] {
        COMMANDS
    }

    async fn execute(&self, command: &str, _args: &[String]) -> Result<String> {
        match command {
            "fetch" => self.fetch().await,
            "test2" => self.random_pair(),
            other => Err(Error::UnknownCommand(other.to_string())),
        }
    }
}
