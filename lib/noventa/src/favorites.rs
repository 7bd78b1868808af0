use itertools::Itertools;
use serde_json::Value;
use shared::FavoriteItem;
use tracing::warn;

use crate::storage::KeyValueStore;

/// Durable-area key holding the JSON array of favorites.
pub const FAVORITES_KEY: &str = "favorites";

/// Favorites persisted as a JSON array of [`FavoriteItem`]s.
///
/// Reading never fails: a missing key, malformed JSON or a non-array value
/// reads as an empty list, undecodable entries are skipped and duplicate ids
/// collapse onto their first occurrence.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    storage: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn favorites(&self) -> Vec<FavoriteItem> {
        let Some(raw) = self.storage.get(FAVORITES_KEY) else {
            return Vec::new();
        };
        let Ok(Value::Array(values)) = serde_json::from_str::<Value>(&raw) else {
            return Vec::new();
        };

        values
            .into_iter()
            .filter_map(|value| serde_json::from_value::<FavoriteItem>(value).ok())
            .unique_by(|item| item.id.clone())
            .collect()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites().iter().any(|item| item.id == id)
    }

    /// Prepends `item` unless an entry with the same id exists.
    pub fn add(&self, item: FavoriteItem) {
        let mut items = self.favorites();
        if items.iter().any(|existing| existing.id == item.id) {
            return;
        }
        items.insert(0, item);
        self.save(&items);
    }

    /// Removes the entry with `id` and returns what is left.
    pub fn remove(&self, id: &str) -> Vec<FavoriteItem> {
        let items: Vec<FavoriteItem> = self
            .favorites()
            .into_iter()
            .filter(|item| item.id != id)
            .collect();
        self.save(&items);
        items
    }

    /// Returns whether `item` is a favorite after the toggle.
    pub fn toggle(&self, item: FavoriteItem) -> bool {
        if self.is_favorite(&item.id) {
            self.remove(&item.id);
            false
        } else {
            self.add(item);
            true
        }
    }

    fn save(&self, items: &[FavoriteItem]) {
        match serde_json::to_string(items) {
            Ok(json) => self.storage.set(FAVORITES_KEY, &json),
            Err(e) => warn!("Failed to encode favorites: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn item(id: &str) -> FavoriteItem {
        FavoriteItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            description: None,
            price: Some(10.0),
        }
    }

    #[test]
    fn empty_storage_has_no_favorites() {
        let store = FavoritesStore::new(MemoryStore::new());
        assert!(store.favorites().is_empty());
        assert!(!store.is_favorite("1"));
    }

    #[test]
    fn add_prepends_and_ignores_duplicates() {
        let store = FavoritesStore::new(MemoryStore::new());
        store.add(item("1"));
        store.add(item("2"));
        store.add(item("1"));

        let ids: Vec<_> = store.favorites().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn remove_returns_remaining_items() {
        let store = FavoritesStore::new(MemoryStore::new());
        store.add(item("1"));
        store.add(item("2"));

        let remaining = store.remove("1");
        assert_eq!(remaining, vec![item("2")]);
        assert!(!store.is_favorite("1"));
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let store = FavoritesStore::new(MemoryStore::new());

        assert!(store.toggle(item("1")));
        assert!(store.is_favorite("1"));
        assert!(!store.toggle(item("1")));
        assert!(!store.is_favorite("1"));

        store.add(item("2"));
        assert!(!store.toggle(item("2")));
        assert!(store.toggle(item("2")));
        assert!(store.is_favorite("2"));
    }

    #[test]
    fn malformed_json_reads_as_empty() {
        let storage = MemoryStore::new();
        let store = FavoritesStore::new(storage.clone());

        storage.set(FAVORITES_KEY, "{not json");
        assert!(store.favorites().is_empty());

        storage.set(FAVORITES_KEY, r#"{"id":"1"}"#);
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn malformed_storage_is_overwritten_on_add() {
        let storage = MemoryStore::new();
        let store = FavoritesStore::new(storage.clone());
        storage.set(FAVORITES_KEY, "garbage");

        store.add(item("1"));
        assert_eq!(store.favorites(), vec![item("1")]);
    }

    #[test]
    fn stored_duplicates_and_bad_entries_are_dropped() {
        let storage = MemoryStore::new();
        storage.set(
            FAVORITES_KEY,
            r#"[{"id":"1","name":"A"},"2",{"id":"1","name":"B"},{"id":"3","name":"C","price":5}]"#,
        );
        let store = FavoritesStore::new(storage);

        let favorites = store.favorites();
        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites[0].name, "A");
        assert_eq!(favorites[1].price, Some(5.0));
    }
}
