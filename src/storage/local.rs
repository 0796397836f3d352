use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// Browser `localStorage`, shared with every open tab of the app.
pub struct LocalStorage {
    storage: web_sys::Storage,
    seen: HashMap<String, Option<String>>,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".into()))?;
        Ok(Self {
            storage,
            seen: HashMap::new(),
        })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.storage
            .set_item(key, &value)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?;
        self.seen.insert(key.to_owned(), Some(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?;
        self.seen.insert(key.to_owned(), None);
        Ok(())
    }

    fn changed_externally(&mut self, key: &str) -> bool {
        let current = self.get(key);
        match self.seen.insert(key.to_owned(), current.clone()) {
            Some(previous) => previous != current,
            None => false,
        }
    }
}
