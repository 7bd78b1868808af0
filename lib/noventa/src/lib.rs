pub mod auth;
pub mod catalog;
pub mod client;
pub mod error;
pub mod favorites;
pub mod query;
pub mod session;
pub mod storage;
pub mod token;
pub mod validation;

pub use catalog::{
    CatalogSource, FallbackCatalog, Listing, ProductCatalog, RemoteCatalog, StaticCatalog,
};
pub use client::ApiClient;
pub use error::{RequestError, Result};
pub use favorites::FavoritesStore;
pub use query::{ProductQuery, SortMode, ALL_CATEGORIES};
pub use session::{GuardState, Redirect, Session, SessionGuard};
pub use storage::{KeyValueStore, MemoryStore, StorageArea};
pub use token::TokenStore;
