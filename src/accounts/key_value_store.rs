//! Flat string key-value persistence.
//!
//! Accounts, the login session and per-user statistics are each stored as
//! one JSON document under a fixed key. `MemoryStore` keeps them in a map;
//! `JsonFileStore` additionally writes the whole map to disk on every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::StoreError;

pub const USERS_KEY: &str = "chessUsers";
pub const SESSION_KEY: &str = "chessSession";
pub const STATS_KEY: &str = "chessUserStats";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("solo_chess_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").expect("get should succeed"), None);
        store.set("k", "v".to_owned()).expect("set should succeed");
        assert_eq!(store.get("k").expect("get should succeed"), Some("v".to_owned()));
        store.remove("k").expect("remove should succeed");
        assert_eq!(store.get("k").expect("get should succeed"), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let path = scratch_path("kv_reopen");
        let _ = fs::remove_file(&path);

        {
            let mut store = JsonFileStore::open(&path).expect("open should succeed");
            store.set(USERS_KEY, "{}".to_owned()).expect("set should succeed");
        }

        let reopened = JsonFileStore::open(&path).expect("reopen should succeed");
        assert_eq!(
            reopened.get(USERS_KEY).expect("get should succeed"),
            Some("{}".to_owned())
        );
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = scratch_path("kv_corrupt");
        fs::write(&path, "not json").expect("write should succeed");
        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Serde(_))));
        let _ = fs::remove_file(&path);
    }
}
