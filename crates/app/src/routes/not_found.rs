use dioxus::prelude::*;

use crate::routes::Route;

/// Shown when the mini app is opened on a path it does not serve.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " is not part of the virtual office."
                }
                Link { to: Route::Office { query: String::new() },
                    class: "not-found-link",
                    "Back to Office"
                }
            }
        }
    }
}
