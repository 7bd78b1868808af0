use async_trait::async_trait;
use reqwest::Method;
use shared::{catalog::BookRecord, Product};

use super::ProductCatalog;
use crate::client::ApiClient;
use crate::error::{RequestError, Result};

pub const BOOKS_PATH: &str = "/api/v1/books";

/// Catalog backed by the books endpoint. Requires a session token.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: ApiClient,
    token: Option<String>,
}

impl RemoteCatalog {
    pub fn new(client: ApiClient, token: Option<String>) -> Self {
        Self { client, token }
    }
}

#[async_trait(?Send)]
impl ProductCatalog for RemoteCatalog {
    fn id(&self) -> &'static str {
        "remote"
    }

    fn name(&self) -> &'static str {
        "Books API"
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let token = self.token.as_deref().ok_or(RequestError::Unauthenticated)?;

        let records: Vec<BookRecord> = self
            .client
            .request_data::<_, ()>(Method::GET, BOOKS_PATH, None, Some(token), &[])
            .await?;

        Ok(records
            .into_iter()
            .enumerate()
            .map(|(position, record)| record.into_product(position))
            .collect())
    }
}
