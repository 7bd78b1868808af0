use dioxus::prelude::*;
use ui::{use_auth, ProductDetail};

#[component]
pub fn ProductDetailPage(id: String) -> Element {
    let auth = use_auth();
    let product = use_resource(use_reactive!(|id| async move {
        api::find_product(auth.token(), id).await
    }));

    rsx! {
        section { class: "page",
            match &*product.read() {
                Some(product) => rsx! {
                    ProductDetail { product: product.clone() }
                },
                None => rsx! {
                    p { class: "muted", "Yükleniyor..." }
                },
            }
        }
    }
}
