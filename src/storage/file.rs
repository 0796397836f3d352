use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{KeyValueStore, StoreError};

/// Key-value store kept as one JSON object on disk.
///
/// Every mutation rewrites the file. Other processes writing the same file
/// are noticed through its modification time.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    last_modified: Option<SystemTime>,
    changed_keys: HashSet<String>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut store = Self {
            path,
            entries: BTreeMap::new(),
            last_modified: None,
            changed_keys: HashSet::new(),
        };
        store.entries = store.read_entries().unwrap_or_default();
        store.last_modified = store.modified();
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn modified(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).and_then(|m| m.modified()).ok()
    }

    /// `None` when the file exists but cannot be read as a store.
    fn read_entries(&self) -> Option<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Some(BTreeMap::new()),
            Err(err) => {
                log::warn!("Cannot read store {}: {err}", self.path.display());
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|err| log::warn!("Ignoring unreadable store {}: {err}", self.path.display()))
            .ok()
    }

    /// Replaces the file in one step so readers never see a partial write.
    fn flush(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        self.last_modified = self.modified();
        Ok(())
    }

    /// Picks up writes made by another process since we last looked.
    fn sync_external(&mut self) {
        let modified = self.modified();
        if modified == self.last_modified {
            return;
        }
        // Keep what we have and retry on the next poll.
        let Some(fresh) = self.read_entries() else {
            return;
        };
        self.last_modified = modified;

        for key in self.entries.keys().chain(fresh.keys()) {
            if self.entries.get(key) != fresh.get(key) {
                self.changed_keys.insert(key.clone());
            }
        }
        self.entries = fresh;
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.sync_external();
        self.changed_keys.remove(key);
        self.entries.insert(key.to_owned(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.sync_external();
        self.changed_keys.remove(key);
        self.entries.remove(key);
        self.flush()
    }

    fn changed_externally(&mut self, key: &str) -> bool {
        self.sync_external();
        self.changed_keys.remove(key)
    }
}
