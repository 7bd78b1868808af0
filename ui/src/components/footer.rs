use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "footer",
        span { "Noventa" }
        span { class: "muted", "Örnek mağaza" }
      }
    }
}
