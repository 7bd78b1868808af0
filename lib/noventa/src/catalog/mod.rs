//! Product catalog repositories.
//!
//! Views never talk to the books endpoint directly. They ask a
//! [`FallbackCatalog`], which serves the remote catalog when it answers and
//! the built-in [`StaticCatalog`] when it does not.

mod fixtures;
mod remote;

pub use fixtures::StaticCatalog;
pub use remote::{RemoteCatalog, BOOKS_PATH};

use async_trait::async_trait;
use shared::Product;
use tracing::{debug, warn};

use crate::error::Result;

/// Banner text shown when the remote catalog failed and mock data is served.
pub const FALLBACK_WARNING: &str = "Ürünler şu anda yüklenemedi. Örnek ürünler gösteriliyor.";

// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait ProductCatalog {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    async fn list_products(&self) -> Result<Vec<Product>>;

    async fn find_product(&self, id: &str) -> Result<Option<Product>> {
        Ok(self
            .list_products()
            .await?
            .into_iter()
            .find(|product| product.id == id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    Static,
}

/// Products to display plus where they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub products: Vec<Product>,
    pub source: CatalogSource,
    /// Set when the remote catalog failed and the static one stood in.
    pub warning: Option<String>,
}

impl Listing {
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }
}

/// Serves the primary catalog and falls back to [`StaticCatalog`] when it
/// fails or comes back empty. Without a primary it only serves static data.
pub struct FallbackCatalog {
    primary: Option<Box<dyn ProductCatalog>>,
    fallback: StaticCatalog,
}

impl FallbackCatalog {
    pub fn new(primary: impl ProductCatalog + 'static) -> Self {
        Self {
            primary: Some(Box::new(primary)),
            fallback: StaticCatalog,
        }
    }

    pub fn offline() -> Self {
        Self {
            primary: None,
            fallback: StaticCatalog,
        }
    }

    pub async fn listing(&self) -> Listing {
        let Some(primary) = &self.primary else {
            return self.static_listing(None);
        };

        match primary.list_products().await {
            Ok(products) if !products.is_empty() => Listing {
                products,
                source: CatalogSource::Remote,
                warning: None,
            },
            Ok(_) => {
                debug!("{} returned no products, using {}", primary.name(), self.fallback.name());
                self.static_listing(None)
            }
            Err(e) => {
                warn!("{} failed: {}, using {}", primary.name(), e, self.fallback.name());
                self.static_listing(Some(FALLBACK_WARNING.to_string()))
            }
        }
    }

    fn static_listing(&self, warning: Option<String>) -> Listing {
        Listing {
            products: StaticCatalog::products(),
            source: CatalogSource::Static,
            warning,
        }
    }
}

#[async_trait(?Send)]
impl ProductCatalog for FallbackCatalog {
    fn id(&self) -> &'static str {
        "fallback"
    }

    fn name(&self) -> &'static str {
        "Fallback"
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.listing().await.products)
    }
}
