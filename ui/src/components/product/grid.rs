use dioxus::prelude::*;
use shared::Product;

use super::ProductCard;

#[component]
pub fn ProductGrid(products: Vec<Product>) -> Element {
    if products.is_empty() {
        return rsx! {
          p { class: "muted empty", "Aramana uygun ürün bulunamadı." }
        };
    }

    rsx! {
      div { class: "grid",
        for product in products {
          ProductCard { key: "{product.id}", product: product.clone() }
        }
      }
    }
}
