use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "navbar",
            div { class: "brand",
                span { class: "brand-mark", "N" }
                span { class: "brand-name", "Noventa" }
            }

            nav { class: "nav-links", {children} }
        }
    }
}
