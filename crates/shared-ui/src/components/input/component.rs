use dioxus::prelude::*;

/// Labelled single-line input.
///
/// `input_type` is passed straight through, so the same component serves
/// text, number, date and datetime-local fields.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    /// Step for number inputs.
    #[props(default)]
    step: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-group",
            if !label.is_empty() {
                label { class: "form-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                required: required,
                step: step,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
