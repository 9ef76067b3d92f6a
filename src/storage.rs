//! Durable key-value storage

use gloo_storage::{LocalStorage, Storage};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub const KEY_SESSION_TOKEN: &str = "session_token";
pub const KEY_USERNAME: &str = "username";
pub const KEY_CIRCUITS: &str = "circuits";

/// String key-value store that survives page reloads
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Browser `localStorage`, holding raw (non JSON-quoted) values
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            tracing::warn!("Failed to persist '{}' to localStorage", key);
        }
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory store for native tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_entries() {
        let store = MemoryStorage::default();
        let view = store.clone();
        store.set(KEY_USERNAME, "ada");
        assert_eq!(view.get(KEY_USERNAME).as_deref(), Some("ada"));
        view.delete(KEY_USERNAME);
        assert!(store.get(KEY_USERNAME).is_none());
    }
}
