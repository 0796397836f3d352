mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store contents could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("store is unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string key-value storage shared by every widget on this device.
///
/// Mirrors the browser `localStorage` contract: values are plain strings and
/// the last writer wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Returns `true` once for every modification of `key` made by another
    /// execution context since the previous call or our own last write.
    fn changed_externally(&mut self, _key: &str) -> bool {
        false
    }
}

/// Opens the store the running platform persists to.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_default(app_id: &str) -> Box<dyn KeyValueStore> {
    let dir = eframe::storage_dir(app_id).unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join("fitplanner_store.json");
    match FileStore::open(&path) {
        Ok(store) => {
            log::info!("Opened store at {}", path.display());
            Box::new(store)
        }
        Err(err) => {
            log::warn!("Falling back to in-memory store: {err}");
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn open_default(_app_id: &str) -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("Falling back to in-memory store: {err}");
            Box::new(MemoryStore::default())
        }
    }
}
