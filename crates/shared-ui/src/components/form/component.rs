use dioxus::prelude::*;

/// Column-stacked form. The browser's own submission is always suppressed;
/// `onsubmit` decides what happens.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "modal-form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Inline message listing fields that still need a value.
#[component]
pub fn FormMissing(fields: Vec<String>) -> Element {
    if fields.is_empty() {
        return rsx! {};
    }
    let list = fields.join(", ");
    rsx! {
        p { class: "form-missing", role: "alert", "Please fill in: {list}" }
    }
}
