use dioxus::prelude::*;
use noventa::{ProductQuery, SortMode};

/// Search box, category and sort selects bound to `query`.
#[component]
pub fn ProductFilters(query: Signal<ProductQuery>, categories: Vec<String>) -> Element {
    let mut query = query;
    let current = query();

    rsx! {
      div { class: "filters",
        input {
          class: "input search",
          r#type: "search",
          placeholder: "Ürün ara...",
          value: "{current.text}",
          oninput: move |e| query.write().text = e.value(),
        }
        select {
          class: "input",
          value: "{current.category}",
          onchange: move |e| query.write().category = e.value(),
          for category in categories {
            option {
              key: "{category}",
              value: "{category}",
              selected: category == current.category,
              "{category}"
            }
          }
        }
        select {
          class: "input",
          value: current.sort.as_str(),
          onchange: move |e| query.write().sort = SortMode::from(e.value().as_str()),
          for mode in SortMode::ALL {
            option {
              key: "{mode.as_str()}",
              value: mode.as_str(),
              selected: mode == current.sort,
              "{mode.label()}"
            }
          }
        }
      }
    }
}
