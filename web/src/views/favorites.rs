use dioxus::prelude::*;
use ui::FavoritesList;

#[component]
pub fn FavoritesPage() -> Element {
    rsx! {
        section { class: "page",
            div { class: "page-header",
                h1 { "Favoriler" }
                p { class: "muted", "Beğendiğin ürünler burada listelenir." }
            }
            FavoritesList {}
        }
    }
}
