//! Flat JSON snapshots of the all-pairs ticker.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::Result;

/// One pair's ticker fields plus `id` and `symbol`.
pub type SnapshotEntry = Map<String, Value>;

const FILE_PREFIX: &str = "crypto_data_with_ids_";

/// Flatten a ticker document into numbered entries.
///
/// The pair map is the `data` object when present, otherwise the document
/// itself. Entries keep response order and get a 1-based `id`; values that
/// are not objects are skipped.
#[must_use]
pub fn build_entries(document: &Value) -> Vec<SnapshotEntry> {
    let pairs = match document.get("data") {
        Some(Value::Object(inner)) => inner,
        _ => match document {
            Value::Object(map) => map,
            _ => return Vec::new(),
        },
    };

    pairs
        .iter()
        .filter_map(|(symbol, fields)| fields.as_object().map(|f| (symbol, f)))
        .enumerate()
        .map(|(i, (symbol, fields))| {
            let mut entry = fields.clone();
            entry.insert("id".into(), Value::from(i + 1));
            entry.insert("symbol".into(), Value::from(symbol.as_str()));
            entry
        })
        .collect()
}

/// Directory of timestamped snapshot files.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn file_name(unix_secs: i64) -> String {
        format!("{FILE_PREFIX}{unix_secs}.json")
    }

    /// Write `entries` stamped with the current time.
    pub fn write(&self, entries: &[SnapshotEntry]) -> Result<PathBuf> {
        self.write_at(entries, chrono::Utc::now().timestamp())
    }

    /// Write `entries` as pretty JSON stamped with `unix_secs`.
    pub fn write_at(&self, entries: &[SnapshotEntry], unix_secs: i64) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(Self::file_name(unix_secs));
        let body = serde_json::to_string_pretty(entries)?;
        fs::write(&path, body)?;
        info!(path = %path.display(), count = entries.len(), "Stored snapshot");
        Ok(path)
    }

    /// Most recently modified `*.json` file whose name mentions `crypto`.
    pub fn latest(&self) -> Result<Option<PathBuf>> {
        let dir = match fs::read_dir(&self.dir) {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut newest: Option<(SystemTime, PathBuf)> = None;
        for entry in dir {
            let entry = entry?;
            let path = entry.path();
            if !is_snapshot_file(&path) || !entry.file_type()?.is_file() {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            let newer = match &newest {
                Some((best, best_path)) => (modified, &path) > (*best, best_path),
                None => true,
            };
            if newer {
                newest = Some((modified, path));
            }
        }

        if let Some((_, path)) = &newest {
            debug!(path = %path.display(), "Latest snapshot");
        }
        Ok(newest.map(|(_, path)| path))
    }

    /// Load a snapshot written by [`Self::write`].
    pub fn read(path: &Path) -> Result<Vec<SnapshotEntry>> {
        let body = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn is_snapshot_file(path: &Path) -> bool {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext == "json");
    let mentions_crypto = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().contains("crypto"));
    is_json && mentions_crypto
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn document() -> Value {
        json!({
            "data": {
                "BTCUSDT": {"last_price": "67000.1", "symbol": "ignored"},
                "ETHUSDT": {"last_price": "3500"},
                "broken": 5
            }
        })
    }

    #[test]
    fn entries_unwrap_data_and_number_from_one() {
        let entries = build_entries(&document());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], json!(1));
        assert_eq!(entries[0]["symbol"], json!("BTCUSDT"));
        assert_eq!(entries[0]["last_price"], json!("67000.1"));
        assert_eq!(entries[1]["id"], json!(2));
        assert_eq!(entries[1]["symbol"], json!("ETHUSDT"));
    }

    #[test]
    fn entries_from_bare_map() {
        let entries = build_entries(&json!({"SOLUSDT": {"last_price": "150"}}));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["symbol"], json!("SOLUSDT"));
    }

    #[test]
    fn entries_from_non_object_are_empty() {
        assert!(build_entries(&json!([1, 2, 3])).is_empty());
        assert!(build_entries(&json!("nope")).is_empty());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        let entries = build_entries(&document());

        let path = store.write_at(&entries, 1_751_147_426).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "crypto_data_with_ids_1751147426.json"
        );
        assert_eq!(SnapshotStore::read(&path).unwrap(), entries);

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("[\n  {"));
    }

    #[test]
    fn latest_ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        assert_eq!(store.latest().unwrap(), None);

        fs::write(dir.path().join("config.json"), "{}").unwrap();
        fs::write(dir.path().join("crypto_notes.txt"), "").unwrap();
        assert_eq!(store.latest().unwrap(), None);

        let first = store.write_at(&[], 1).unwrap();
        assert_eq!(store.latest().unwrap(), Some(first));
    }

    #[test]
    fn latest_prefers_newest_modification() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());

        let older = store.write_at(&[], 2).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        let newer = dir.path().join("crypto_zz_manual.json");
        fs::write(&newer, "[]").unwrap();

        assert_ne!(store.latest().unwrap(), Some(older));
        assert_eq!(store.latest().unwrap(), Some(newer));
    }

    #[test]
    fn snapshot_name_matches_crypto_in_any_case_but_lowercase_json_only() {
        assert!(is_snapshot_file(Path::new("/tmp/CRYPTO_dump.json")));
        assert!(is_snapshot_file(Path::new("/tmp/Crypto_x.json")));
        assert!(!is_snapshot_file(Path::new("/tmp/crypto_dump.JSON")));
        assert!(!is_snapshot_file(Path::new("/tmp/CRYPTO.JSON")));
        assert!(!is_snapshot_file(Path::new("/tmp/crypto_dump.json.bak")));
        assert!(!is_snapshot_file(Path::new("/tmp/tickers.json")));
    }

    #[test]
    fn latest_skips_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        fs::write(dir.path().join("CRYPTO.JSON"), "[]").unwrap();
        assert_eq!(store.latest().unwrap(), None);

        let counted = dir.path().join("Crypto_x.json");
        fs::write(&counted, "[]").unwrap();
        assert_eq!(store.latest().unwrap(), Some(counted));
    }

    #[test]
    fn missing_directory_has_no_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path().join("absent"));
        assert_eq!(store.latest().unwrap(), None);
    }
}
