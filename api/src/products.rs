use noventa::{FallbackCatalog, Listing, RemoteCatalog};
use shared::Product;
use tracing::{debug, warn};

use crate::config::{AppConfig, CONFIG};

/// Picks the catalog for the current configuration and session.
///
/// Mock mode and anonymous visitors get the static catalog; everyone else
/// gets the books API with the static catalog as fallback.
pub fn catalog(config: &AppConfig, token: Option<String>) -> FallbackCatalog {
    if config.mock_catalog {
        debug!("Mock catalog enabled");
        return FallbackCatalog::offline();
    }
    if token.is_none() {
        debug!("No session token, serving static catalog");
        return FallbackCatalog::offline();
    }

    match config.catalog_client() {
        Ok(client) => FallbackCatalog::new(RemoteCatalog::new(client, token)),
        Err(e) => {
            warn!("Catalog client unavailable: {}", e);
            FallbackCatalog::offline()
        }
    }
}

pub async fn list_products(token: Option<String>) -> Listing {
    catalog(&CONFIG, token).listing().await
}

/// Looks `id` up in the current listing. Unknown ids yield a placeholder.
pub async fn find_product(token: Option<String>, id: String) -> Product {
    find_product_with(&CONFIG, token, &id).await
}

pub async fn find_product_with(config: &AppConfig, token: Option<String>, id: &str) -> Product {
    catalog(config, token)
        .listing()
        .await
        .find(id)
        .cloned()
        .unwrap_or_else(|| Product::placeholder(id))
}
