use crate::world::edits::{EditLog, PlacedBlock};
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed key the placed-block list persists under.
pub const PLACED_BLOCKS_KEY: &str = "placed_blocks";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage write failed: {0}")]
    Write(#[from] io::Error),

    #[error("Encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable string key-value boundary supplied by the host. Reads never
/// fail: anything unreadable is simply absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under a base directory, created on first write.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Serializes the placed-block list as JSON under [`PLACED_BLOCKS_KEY`].
pub fn save_placed_blocks(
    store: &mut dyn KeyValueStore,
    log: &EditLog,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(log.blocks())?;
    store.set(PLACED_BLOCKS_KEY, &json)
}

/// Loads the placed-block list. Missing or malformed data yields an empty
/// list, never an error.
pub fn load_placed_blocks(store: &dyn KeyValueStore) -> EditLog {
    let Some(raw) = store.get(PLACED_BLOCKS_KEY) else {
        return EditLog::new();
    };
    match serde_json::from_str::<Vec<PlacedBlock>>(&raw) {
        Ok(blocks) => EditLog::from_blocks(blocks),
        Err(e) => {
            warn!("Discarding malformed placed-block data: {e}");
            EditLog::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block::BlockType;
    use glam::IVec3;
    use std::collections::HashSet;

    fn sample_log() -> EditLog {
        let mut log = EditLog::new();
        log.record_place(IVec3::new(10, 6, 10), BlockType::Wood);
        log.record_place(IVec3::new(10, 7, 10), BlockType::Wood);
        log.record_place(IVec3::new(-3, 0, 12), BlockType::Glass);
        log
    }

    fn as_set(log: &EditLog) -> HashSet<PlacedBlock> {
        log.blocks().iter().copied().collect()
    }

    #[test]
    fn round_trip_is_order_insensitive() {
        let mut store = MemoryStore::new();
        let log = sample_log();

        save_placed_blocks(&mut store, &log).unwrap();
        let loaded = load_placed_blocks(&store);

        assert_eq!(as_set(&loaded), as_set(&log));
    }

    #[test]
    fn missing_key_loads_as_empty() {
        let store = MemoryStore::new();
        assert!(load_placed_blocks(&store).is_empty());
    }

    #[test]
    fn malformed_data_loads_as_empty() {
        let mut store = MemoryStore::new();
        for garbage in ["not json", "{\"position\": 1}", "[{\"position\":[1,2]}]"] {
            store.set(PLACED_BLOCKS_KEY, garbage).unwrap();
            assert!(load_placed_blocks(&store).is_empty());
        }
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("saves"));

        assert_eq!(store.get(PLACED_BLOCKS_KEY), None);

        let log = sample_log();
        save_placed_blocks(&mut store, &log).unwrap();

        let reopened = FileStore::new(dir.path().join("saves"));
        assert_eq!(as_set(&load_placed_blocks(&reopened)), as_set(&log));
    }
}
