use crate::components::Footer;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "shell",
        {children}
        Footer {}
      }
    }
}
