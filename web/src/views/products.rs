use dioxus::prelude::*;
use noventa::query::categories;
use noventa::ProductQuery;
use ui::{use_auth, ProductFilters, ProductGrid};

#[component]
pub fn ProductsPage() -> Element {
    let auth = use_auth();
    let query = use_signal(ProductQuery::default);
    let listing = use_resource(move || async move { api::list_products(auth.token()).await });

    rsx! {
        section { class: "page",
            div { class: "page-header",
                h1 { "Ürünler" }
                p { class: "muted", "Kataloğu inceleyebilir ve ürün detaylarına geçebilirsiniz." }
            }

            match &*listing.read() {
                None => rsx! {
                    p { class: "muted", "Yükleniyor..." }
                },
                Some(listing) => rsx! {
                    if listing.is_degraded() {
                        p { class: "alert alert-warning", {listing.warning.clone()} }
                    }
                    ProductFilters { query, categories: categories(&listing.products) }
                    ProductGrid { products: query.read().apply(&listing.products) }
                },
            }
        }
    }
}
