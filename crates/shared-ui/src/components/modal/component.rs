use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// The single overlay dialog.
///
/// The overlay is always in the tree; `open` toggles its `active` class.
/// Clicking the dimmed background closes it, clicks inside the panel do not.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    let class = if open {
        "modal-overlay active"
    } else {
        "modal-overlay"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: class,
            "data-open": open,
            onclick: move |_| on_close.call(()),
            if open {
                div {
                    class: "modal",
                    role: "dialog",
                    onclick: move |evt| evt.stop_propagation(),
                    div { class: "modal-header",
                        h3 { class: "modal-title", "{title}" }
                        ModalClose { on_close }
                    }
                    div { class: "modal-body", {children} }
                }
            }
        }
    }
}

#[component]
pub fn ModalClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "modal-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            Icon::<LdX> { icon: LdX, width: 18, height: 18 }
        }
    }
}
