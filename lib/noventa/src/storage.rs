//! Key/value storage the session and favorites state persist into.
//!
//! The browser exposes two areas: a durable one that survives restarts
//! (`localStorage`) and a session-scoped one tied to the tab
//! (`sessionStorage`). Both are modelled by [`KeyValueStore`]; the browser
//! implementation lives in the `ui` crate, [`MemoryStore`] backs tests and
//! non-browser targets.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Which browser storage area a store writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageArea {
    Durable,
    Session,
}

/// Synchronous string storage. Implementations never fail: a missing
/// backend reads as empty and ignores writes.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().map(|e| e.is_empty()).unwrap_or(true)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));

        other.remove("k");
        assert!(store.get("k").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "1");
        store.set("k", "2");
        assert_eq!(store.get("k").as_deref(), Some("2"));
    }
}
