use dioxus::prelude::*;
use noventa::FavoritesStore;
use shared::{FavoriteItem, Product};

use crate::BrowserStorage;

/// Favorites context. Storage is the source of truth, the signal mirrors it
/// so views re-render on change.
#[derive(Clone, Copy, Debug)]
pub struct Favorites {
    items: Signal<Vec<FavoriteItem>>,
}

impl Favorites {
    pub fn new(items: Signal<Vec<FavoriteItem>>) -> Self {
        Self { items }
    }

    fn store() -> FavoritesStore<BrowserStorage> {
        FavoritesStore::new(BrowserStorage::durable())
    }

    pub fn load() -> Vec<FavoriteItem> {
        Self::store().favorites()
    }

    pub fn items(&self) -> Vec<FavoriteItem> {
        self.items.read().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.read().iter().any(|item| item.id == id)
    }

    /// Returns whether the product is a favorite afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        let store = Self::store();
        let added = store.toggle(FavoriteItem::from(product));
        self.items.set(store.favorites());
        added
    }

    pub fn remove(&mut self, id: &str) {
        let remaining = Self::store().remove(id);
        self.items.set(remaining);
    }
}

pub fn use_favorites() -> Favorites {
    use_context::<Favorites>()
}
