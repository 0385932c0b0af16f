//! File-backed key-value store with automatic serialization.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::StorageError;

/// Environment variable overriding the default store directory.
const DATA_DIR_ENV: &str = "MERCADITO_DATA_DIR";

/// Directory used when [`DATA_DIR_ENV`] is not set.
const DEFAULT_DIR: &str = ".mercadito";

/// Per-user key-value store backed by one JSON file per key.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Writes are unconditional: with two
/// writers on the same directory, the last write wins.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::Open {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Open the default store.
    ///
    /// The directory comes from the `MERCADITO_DATA_DIR` environment
    /// variable, falling back to `.mercadito` in the working directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DIR));
        Self::open(dir)
    }

    /// Get a value, deserializing it from its backing file.
    ///
    /// Returns `None` if the key doesn't exist. A present but undecodable
    /// value is an error; callers decide whether to fall back.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Get the raw bytes stored under `key`.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value, serializing it to its backing file.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }

    /// Store raw bytes under `key`.
    pub fn set_raw(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        fs::write(self.key_path(key), bytes)?;
        Ok(())
    }

    /// Delete the value stored under `key`. Deleting an absent key is a
    /// no-op.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.key_path(key).try_exists()?)
    }

    /// List all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Map a key to its backing file, replacing anything that is not safe
    /// in a file name.
    fn key_path(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{sanitized}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Draft {
        note: String,
        count: u32,
    }

    fn open_temp() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn set_then_get_roundtrips() {
        let (_dir, store) = open_temp();
        let draft = Draft {
            note: "hola".to_string(),
            count: 3,
        };

        store.set("draft", &draft).unwrap();
        let loaded: Option<Draft> = store.get("draft").unwrap();
        assert_eq!(loaded, Some(draft));
    }

    #[test]
    fn get_missing_key_is_none() {
        let (_dir, store) = open_temp();
        let loaded: Option<Draft> = store.get("nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn undecodable_value_is_an_error() {
        let (_dir, store) = open_temp();
        store.set_raw("draft", b"{ not json").unwrap();

        let result: Result<Option<Draft>, _> = store.get("draft");
        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn delete_is_idempotent() {
        let (_dir, store) = open_temp();
        store.set("draft", &1u32).unwrap();

        store.delete("draft").unwrap();
        assert!(!store.exists("draft").unwrap());
        store.delete("draft").unwrap();
    }

    #[test]
    fn keys_lists_stored_entries() {
        let (_dir, store) = open_temp();
        store.set("cart", &1u32).unwrap();
        store.set("search", &2u32).unwrap();

        assert_eq!(store.keys().unwrap(), vec!["cart", "search"]);
    }

    #[test]
    fn unsafe_key_characters_stay_inside_the_store() {
        let (dir, store) = open_temp();
        store.set("../escape/attempt", &1u32).unwrap();

        for key in store.keys().unwrap() {
            assert!(!key.contains('/'));
        }
        assert!(dir.path().join("..-escape-attempt.json").exists());
    }

    #[test]
    fn last_write_wins() {
        let (_dir, store) = open_temp();
        store.set("draft", &1u32).unwrap();
        store.set("draft", &2u32).unwrap();

        assert_eq!(store.get::<u32>("draft").unwrap(), Some(2));
    }
}
