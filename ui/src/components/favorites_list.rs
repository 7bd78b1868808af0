use dioxus::prelude::*;

use crate::components::product::{product_href, PRODUCTS_HREF};
use crate::{format_price, use_favorites, Button, ButtonVariant};

#[component]
pub fn FavoritesList() -> Element {
    let mut favorites = use_favorites();
    let items = favorites.items();

    if items.is_empty() {
        return rsx! {
          div { class: "card empty",
            p { "Henüz favori ürünün yok." }
            Link { class: "btn btn-primary", to: PRODUCTS_HREF, "Ürünlere git" }
          }
        };
    }

    rsx! {
      ul { class: "favorites",
        for item in items {
          li { key: "{item.id}", class: "card favorite-row",
            div {
              h2 { "{item.name}" }
              if let Some(description) = &item.description {
                p { class: "muted clamp", "{description}" }
              }
              if let Some(price) = format_price(item.price) {
                span { class: "price-tag", "{price}" }
              }
            }
            div { class: "row-actions",
              Link { class: "btn btn-secondary", to: product_href(&item.id), "Detay" }
              Button {
                variant: ButtonVariant::Danger,
                onclick: {
                    let id = item.id.clone();
                    move |_| favorites.remove(&id)
                },
                "Çıkar"
              }
            }
          }
        }
      }
    }
}
