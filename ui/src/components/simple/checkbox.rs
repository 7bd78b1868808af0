use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct Props {
    checked: bool,
    label: &'static str,
    #[props(into)]
    onchange: EventHandler<bool>,
}

#[component]
pub fn Checkbox(props: Props) -> Element {
    rsx! {
      label { class: "checkbox",
        input {
          r#type: "checkbox",
          checked: props.checked,
          onchange: move |e| props.onchange.call(e.checked()),
        }
        span { "{props.label}" }
      }
    }
}
