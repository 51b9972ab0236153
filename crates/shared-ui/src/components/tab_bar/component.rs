use dioxus::prelude::*;

/// Bottom navigation strip holding [`TabButton`]s.
#[component]
pub fn TabBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "tab-bar", role: "tablist", {children} }
    }
}

/// One tab. `children` is the icon.
#[component]
pub fn TabButton(
    active: bool,
    label: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = if active { "tab-btn active" } else { "tab-btn" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            role: "tab",
            "aria-selected": active,
            onclick: move |evt| onclick.call(evt),
            {children}
            span { class: "tab-label", "{label}" }
        }
    }
}

/// Content for one tab. Only the active pane is rendered.
#[component]
pub fn TabPane(id: String, active: bool, children: Element) -> Element {
    if !active {
        return rsx! {};
    }
    rsx! {
        div { id: id, class: "tab-content active", role: "tabpanel", {children} }
    }
}
