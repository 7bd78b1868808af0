use noventa::{KeyValueStore, StorageArea};

/// Helper to abstract WebSys `localStorage`/`sessionStorage` interactions.
///
/// Outside the browser every read is empty and writes are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub fn new(area: StorageArea) -> Self {
        Self { area }
    }

    pub fn durable() -> Self {
        Self::new(StorageArea::Durable)
    }

    pub fn session() -> Self {
        Self::new(StorageArea::Session)
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    #[cfg(target_arch = "wasm32")]
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            StorageArea::Durable => window.local_storage().ok().flatten(),
            StorageArea::Session => window.session_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = self.storage() {
            return storage.get_item(_key).ok().flatten();
        }
        None
    }

    fn set(&self, _key: &str, _value: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(_key, _value);
        }
    }

    fn remove(&self, _key: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(_key);
        }
    }
}
