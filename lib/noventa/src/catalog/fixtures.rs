use async_trait::async_trait;
use shared::Product;

use super::ProductCatalog;
use crate::error::Result;

/// The built-in five product catalog served when the API is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn products() -> Vec<Product> {
        vec![
            Product::new("1", "Kablosuz Kulaklık")
                .with_description("Gürültü engelleme, yüksek kalite ses ve uzun pil ömrü.")
                .with_price(2499.0)
                .with_category("Elektronik"),
            Product::new("2", "Akıllı Saat")
                .with_description("Sağlık takibi, bildirimler ve spor modları.")
                .with_price(3199.0)
                .with_category("Giyilebilir"),
            Product::new("3", "Mekanik Klavye")
                .with_description("Konforlu yazım, dayanıklı switch yapısı ve kompakt tasarım.")
                .with_price(1899.0)
                .with_category("Aksesuar"),
            Product::new("4", "Oyuncu Mouse")
                .with_description("Yüksek hassasiyet sensör, ergonomik gövde.")
                .with_price(999.0)
                .with_category("Aksesuar"),
            Product::new("5", "4K Monitör")
                .with_description("Keskin görüntü, geniş ekran çalışma alanı.")
                .with_price(7999.0)
                .with_category("Elektronik"),
        ]
    }
}

#[async_trait(?Send)]
impl ProductCatalog for StaticCatalog {
    fn id(&self) -> &'static str {
        "static"
    }

    fn name(&self) -> &'static str {
        "Static catalog"
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(Self::products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn five_products_with_unique_ids() {
        let products = StaticCatalog::products();
        assert_eq!(products.len(), 5);
        assert!(products.iter().map(|p| &p.id).all_unique());
        assert!(products.iter().all(|p| p.price.is_some() && p.category.is_some()));
    }
}
