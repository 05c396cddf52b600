use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::info;

use crate::error::Result;
use crate::extractor::BusinessRecord;

/// Durable store for the accumulated result set: a single JSON array,
/// rewritten wholesale after every appended record. A missing file is the
/// normal first-run state; a file that exists but does not parse aborts the
/// run rather than silently clobbering previously harvested data.
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CheckpointStore { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<BusinessRecord>> {
        if !self.path.exists() {
            info!("No checkpoint at {:?}. Starting fresh.", self.path);
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<BusinessRecord> = serde_json::from_str(&content)?;
        info!(
            "Resumed previous session: {} businesses already saved.",
            records.len()
        );
        Ok(records)
    }

    /// URLs already present in a loaded result set. Derived once at load
    /// time, never persisted on its own.
    pub fn derive_visited(records: &[BusinessRecord]) -> HashSet<String> {
        records.iter().map(|r| r.url.clone()).collect()
    }

    /// Appends and immediately rewrites the whole set. Once this returns the
    /// record is durable.
    pub fn append(&self, records: &mut Vec<BusinessRecord>, record: BusinessRecord) -> Result<()> {
        records.push(record);
        self.save(records)
    }

    fn save(&self, records: &[BusinessRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, name: &str) -> BusinessRecord {
        BusinessRecord {
            url: url.to_string(),
            business_name: name.to_string(),
            ..BusinessRecord::default()
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_is_durable_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let store = CheckpointStore::new(&path);

        let mut records = store.load().unwrap();
        store
            .append(&mut records, record("https://example.com/a~1", "A"))
            .unwrap();

        // A fresh store sees the first record before the second is appended.
        let snapshot = CheckpointStore::new(&path).load().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].business_name, "A");

        store
            .append(&mut records, record("https://example.com/b~2", "B"))
            .unwrap();
        let reloaded = CheckpointStore::new(&path).load().unwrap();
        assert_eq!(reloaded, records);
    }

    #[test]
    fn visited_index_holds_every_saved_url() {
        let records = vec![
            record("https://example.com/a~1", "A"),
            record("https://example.com/b~2", "B"),
        ];
        let visited = CheckpointStore::derive_visited(&records);
        assert_eq!(visited.len(), 2);
        assert!(visited.contains("https://example.com/a~1"));
        assert!(visited.contains("https://example.com/b~2"));
    }

    #[test]
    fn malformed_checkpoint_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(CheckpointStore::new(&path).load().is_err());
    }
}
