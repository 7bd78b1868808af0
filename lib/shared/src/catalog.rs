use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name used when a remote record carries neither `name` nor `title`.
pub const UNNAMED_PRODUCT: &str = "Ürün";

/// Description shown for products the catalog does not know about yet.
pub const PENDING_DESCRIPTION: &str = "Ürün detayı yakında eklenecektir.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Stand-in rendered by the detail view for ids missing from the catalog.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(id, UNNAMED_PRODUCT).with_description(PENDING_DESCRIPTION)
    }
}

/// A book as returned by `GET /api/v1/books`. Field presence and types vary
/// between deployments, so everything is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
}

impl BookRecord {
    /// Converts the record into a [`Product`]. `position` is the zero-based
    /// index in the response and becomes the id when the record has none.
    pub fn into_product(self, position: usize) -> Product {
        let id = match self.id {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => (position + 1).to_string(),
        };
        let name = self
            .name
            .or(self.title)
            .unwrap_or_else(|| UNNAMED_PRODUCT.to_string());

        Product {
            id,
            name,
            description: self.description,
            price: self.price.as_ref().and_then(Value::as_f64),
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_record_prefers_name_over_title() {
        let record: BookRecord =
            serde_json::from_str(r#"{"id":7,"name":"Dune","title":"ignored","price":12.5}"#)
                .unwrap();
        let product = record.into_product(0);

        assert_eq!(product.id, "7");
        assert_eq!(product.name, "Dune");
        assert_eq!(product.price, Some(12.5));
    }

    #[test]
    fn book_record_falls_back_to_title_and_position() {
        let record: BookRecord =
            serde_json::from_str(r#"{"title":"Solaris","price":"cheap"}"#).unwrap();
        let product = record.into_product(2);

        assert_eq!(product.id, "3");
        assert_eq!(product.name, "Solaris");
        assert_eq!(product.price, None);
    }

    #[test]
    fn book_record_without_names_is_unnamed() {
        let product = BookRecord::default().into_product(0);
        assert_eq!(product.name, UNNAMED_PRODUCT);
    }

    #[test]
    fn placeholder_has_pending_description() {
        let product = Product::placeholder("42");
        assert_eq!(product.id, "42");
        assert_eq!(product.description.as_deref(), Some(PENDING_DESCRIPTION));
        assert_eq!(product.price, None);
    }
}
