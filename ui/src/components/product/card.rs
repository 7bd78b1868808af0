use dioxus::prelude::*;
use shared::Product;

use super::product_href;
use crate::{format_price, use_favorites};

#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut favorites = use_favorites();
    let is_favorite = favorites.contains(&product.id);
    let initial = product.name.chars().next().unwrap_or('?');
    let price = format_price(product.price);
    let toggled = product.clone();

    rsx! {
      article { class: "card product-card",
        Link { class: "product-link", to: product_href(&product.id),
          div { class: "product-thumb", "{initial}" }
          div { class: "product-heading",
            h2 { "{product.name}" }
            if let Some(price) = price {
              span { class: "price-tag", "{price}" }
            }
          }
          if let Some(category) = &product.category {
            span { class: "badge", "{category}" }
          }
          if let Some(description) = &product.description {
            p { class: "muted clamp", "{description}" }
          }
        }
        button {
          r#type: "button",
          class: if is_favorite { "fav-toggle active" } else { "fav-toggle" },
          title: if is_favorite { "Favorilerden Çıkar" } else { "Favoriye Ekle" },
          onclick: move |_| {
              favorites.toggle(&toggled);
          },
          if is_favorite { "♥" } else { "♡" }
        }
      }
    }
}
