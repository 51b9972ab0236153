use dioxus::prelude::*;

/// Native `<select>` with a label, used by the action forms and the case
/// filters.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Shown above the select; omitted when empty.
    #[props(default)]
    label: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-group",
            if !label.is_empty() {
                label { class: "form-label", "{label}" }
            }
            select {
                class: "form-select",
                value: value,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}
