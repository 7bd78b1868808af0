use dioxus::prelude::*;
use shared::catalog::PENDING_DESCRIPTION;
use shared::Product;

use super::{FAVORITES_HREF, PRODUCTS_HREF};
use crate::{format_price, use_favorites};

#[component]
pub fn ProductDetail(product: Product) -> Element {
    let mut favorites = use_favorites();
    let is_favorite = favorites.contains(&product.id);
    let description = product
        .description
        .clone()
        .unwrap_or_else(|| PENDING_DESCRIPTION.to_string());
    let price = format_price(product.price);
    let toggled = product.clone();

    rsx! {
      div { class: "detail",
        div { class: "detail-nav",
          Link { class: "back-link", to: PRODUCTS_HREF, "← Ürünlere dön" }
          Link { class: "btn btn-secondary", to: FAVORITES_HREF, "Favoriler" }
        }

        div { class: "card",
          if let Some(category) = &product.category {
            span { class: "badge", "{category}" }
          }
          h1 { "{product.name}" }
          p { class: "muted", "{description}" }
          if let Some(price) = price {
            p { class: "price", "{price}" }
          }

          button {
            r#type: "button",
            class: if is_favorite { "btn btn-secondary" } else { "btn btn-primary" },
            onclick: move |_| {
                favorites.toggle(&toggled);
            },
            if is_favorite { "Favorilerden Çıkar" } else { "Favoriye Ekle" }
          }
        }
      }
    }
}
