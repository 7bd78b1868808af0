use std::cmp::Ordering;

use itertools::Itertools;
use shared::Product;

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "Tümü";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Default, SortMode::PriceAsc, SortMode::PriceDesc];

    /// Value used in the sort `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Önerilen",
            SortMode::PriceAsc => "Fiyat: Düşükten Yükseğe",
            SortMode::PriceDesc => "Fiyat: Yüksekten Düşüğe",
        }
    }
}

impl From<&str> for SortMode {
    /// Unknown values select the default order.
    fn from(value: &str) -> Self {
        match value {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            _ => SortMode::Default,
        }
    }
}

/// Search text, category filter and sort order applied to a product list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub text: String,
    pub category: String,
    pub sort: SortMode,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortMode::Default,
        }
    }
}

impl ProductQuery {
    /// Filters and sorts `products`. Sorting is stable: products with equal
    /// prices keep their input order. Products without a price go last when
    /// ascending and first when descending.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self.text.trim().to_lowercase();

        let mut visible: Vec<Product> = products
            .iter()
            .filter(|product| needle.is_empty() || haystack(product).contains(&needle))
            .filter(|product| {
                self.category == ALL_CATEGORIES
                    || product.category.as_deref() == Some(self.category.as_str())
            })
            .cloned()
            .collect();

        match self.sort {
            SortMode::Default => {}
            SortMode::PriceAsc => visible.sort_by(|a, b| compare_price(a.price, b.price)),
            SortMode::PriceDesc => visible.sort_by(|a, b| compare_price(b.price, a.price)),
        }

        visible
    }
}

/// `ALL_CATEGORIES` followed by each distinct category in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            products
                .iter()
                .filter_map(|product| product.category.clone())
                .filter(|category| category != ALL_CATEGORIES),
        )
        .unique()
        .collect()
}

fn haystack(product: &Product) -> String {
    [
        Some(product.name.as_str()),
        product.description.as_deref(),
        product.category.as_deref(),
    ]
    .into_iter()
    .flatten()
    .join(" ")
    .to_lowercase()
}

/// Ascending price order with missing prices after every priced product.
fn compare_price(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn default_query_keeps_everything_in_order() {
        let products = StaticCatalog::products();
        assert_eq!(ProductQuery::default().apply(&products), products);
    }

    #[test]
    fn text_matches_case_insensitively_across_fields() {
        let products = StaticCatalog::products();
        let query = ProductQuery {
            text: "MOUSE".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec!["4"]);

        let by_description = ProductQuery {
            text: "pil ömrü".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_description.apply(&products)), vec!["1"]);

        let by_category = ProductQuery {
            text: "aksesuar".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_category.apply(&products)), vec!["3", "4"]);
    }

    #[test]
    fn surrounding_whitespace_in_search_text_is_ignored() {
        let products = StaticCatalog::products();
        let padded = ProductQuery {
            text: "  mouse ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&padded.apply(&products)), vec!["4"]);

        let blank = ProductQuery {
            text: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(blank.apply(&products), products);
    }

    #[test]
    fn mouse_in_all_categories_returns_exact_matches() {
        let products = StaticCatalog::products();
        let query = ProductQuery {
            text: "mouse".to_string(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortMode::Default,
        };

        let expected: Vec<Product> = products
            .iter()
            .filter(|p| {
                format!(
                    "{} {} {}",
                    p.name,
                    p.description.clone().unwrap_or_default(),
                    p.category.clone().unwrap_or_default()
                )
                .to_lowercase()
                .contains("mouse")
            })
            .cloned()
            .collect();
        assert_eq!(query.apply(&products), expected);
    }

    #[test]
    fn category_filter_is_exact() {
        let products = StaticCatalog::products();
        let query = ProductQuery {
            category: "Elektronik".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&products)), vec!["1", "5"]);

        let unknown = ProductQuery {
            category: "elektronik".to_string(),
            ..Default::default()
        };
        assert!(unknown.apply(&products).is_empty());
    }

    #[test]
    fn price_sorting_places_missing_prices_and_is_stable() {
        let products = vec![
            Product::new("a", "A").with_price(20.0),
            Product::new("b", "B"),
            Product::new("c", "C").with_price(10.0),
            Product::new("d", "D").with_price(20.0),
            Product::new("e", "E"),
        ];

        let asc = ProductQuery {
            sort: SortMode::PriceAsc,
            ..Default::default()
        };
        assert_eq!(ids(&asc.apply(&products)), vec!["c", "a", "d", "b", "e"]);

        let desc = ProductQuery {
            sort: SortMode::PriceDesc,
            ..Default::default()
        };
        assert_eq!(ids(&desc.apply(&products)), vec!["b", "e", "a", "d", "c"]);
    }

    #[test]
    fn filters_compose_with_sorting() {
        let products = StaticCatalog::products();
        let query = ProductQuery {
            text: "e".to_string(),
            category: "Elektronik".to_string(),
            sort: SortMode::PriceDesc,
        };
        assert_eq!(ids(&query.apply(&products)), vec!["5", "1"]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(
            categories(&StaticCatalog::products()),
            vec!["Tümü", "Elektronik", "Giyilebilir", "Aksesuar"]
        );
        assert_eq!(categories(&[]), vec!["Tümü"]);
    }

    #[test]
    fn sort_mode_round_trips_select_values() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from(mode.as_str()), mode);
        }
        assert_eq!(SortMode::from("bogus"), SortMode::Default);
    }
}
