// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Key/value persistence used to carry session state between requests.
//!
//! The pipeline itself is stateless; whatever must survive a request —
//! the last-parsed catalog, the last-chosen filter preferences — goes
//! through a caller-supplied [`KeyValueStore`]. [`MemoryStore`] backs
//! tests and in-process use; [`JsonFileStore`] keeps the command-line
//! session on disk between invocations.

use log::error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

/// Where the workbench keeps values between requests.
///
/// Semantics are last-write-wins with whole-value replacement: a `set`
/// never merges with a previous value, and a reader sees either the old
/// value or the new one, never a mix. A `ttl` of `None` stores the
/// value permanently. `tags` label values for group invalidation where
/// the backend supports it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&mut self, key: &str, value: Vec<u8>, ttl: Option<Duration>, tags: &[&str]);
    fn delete(&mut self, key: &str);
}

struct MemoryValue {
    data: Vec<u8>,
    expires_at: Option<Instant>,
    tags: Vec<String>,
}

/// Process-local store backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, MemoryValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Drop every value carrying `tag`.
    pub fn invalidate_tag(&mut self, tag: &str) {
        self.values
            .retain(|_, value| !value.tags.iter().any(|t| t == tag));
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.values.get(key)?;
        if value
            .expires_at
            .is_some_and(|deadline| Instant::now() >= deadline)
        {
            return None;
        }
        Some(value.data.clone())
    }

    fn set(&mut self, key: &str, value: Vec<u8>, ttl: Option<Duration>, tags: &[&str]) {
        self.values.insert(
            key.to_string(),
            MemoryValue {
                data: value,
                expires_at: ttl.map(|ttl| Instant::now() + ttl),
                tags: tags.iter().map(|&tag| tag.to_string()).collect(),
            },
        );
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[derive(Serialize, Deserialize)]
struct FileValue {
    data: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<SystemTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

/// Store persisted to a single JSON file.
///
/// The whole map is loaded when the store is opened and written back
/// after every mutation. Writes are best effort, matching the cache
/// contract: a failure is logged and the value stays available in
/// memory for the rest of the process.
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, FileValue>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err),
        };
        Ok(JsonFileStore { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let result = serde_json::to_vec_pretty(&self.values)
            .map_err(io::Error::other)
            .and_then(|bytes| fs::write(&self.path, bytes));
        if let Err(err) = result {
            error!("failed to write store file {}: {err}", self.path.display());
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.values.get(key)?;
        if value
            .expires_at
            .is_some_and(|deadline| SystemTime::now() >= deadline)
        {
            return None;
        }
        Some(value.data.clone())
    }

    fn set(&mut self, key: &str, value: Vec<u8>, ttl: Option<Duration>, tags: &[&str]) {
        self.values.insert(
            key.to_string(),
            FileValue {
                data: value,
                expires_at: ttl.map(|ttl| SystemTime::now() + ttl),
                tags: tags.iter().map(|&tag| tag.to_string()).collect(),
            },
        );
        self.persist();
    }

    fn delete(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_set_get_delete() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", b"one".to_vec(), None, &[]);
        assert_eq!(store.get("k"), Some(b"one".to_vec()));

        store.delete("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_memory_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set("k", b"one".to_vec(), None, &[]);
        store.set("k", b"two".to_vec(), None, &[]);
        assert_eq!(store.get("k"), Some(b"two".to_vec()));
    }

    #[test]
    fn test_memory_ttl_expiry() {
        let mut store = MemoryStore::new();
        store.set("k", b"one".to_vec(), Some(Duration::ZERO), &[]);
        assert_eq!(store.get("k"), None);

        store.set("k", b"one".to_vec(), Some(Duration::from_secs(3600)), &[]);
        assert_eq!(store.get("k"), Some(b"one".to_vec()));
    }

    #[test]
    fn test_memory_tag_invalidation() {
        let mut store = MemoryStore::new();
        store.set("a", b"1".to_vec(), None, &["session"]);
        store.set("b", b"2".to_vec(), None, &["session", "other"]);
        store.set("c", b"3".to_vec(), None, &["other"]);

        store.invalidate_tag("session");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), None);
        assert_eq!(store.get("c"), Some(b"3".to_vec()));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("k", b"one".to_vec(), None, &["session"]);
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k"), Some(b"one".to_vec()));
    }

    #[test]
    fn test_file_store_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("missing.json")).unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_file_store_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("k", b"one".to_vec(), None, &[]);
        store.delete("k");
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k"), None);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, b"not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }
}
