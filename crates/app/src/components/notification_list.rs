use dioxus::prelude::*;
use shared_types::Notification;

#[component]
pub fn NotificationList(notifications: Vec<Notification>) -> Element {
    if notifications.is_empty() {
        return rsx! {
            p { class: "empty-state", "No new notifications" }
        };
    }

    rsx! {
        div { class: "notification-list",
            for n in notifications.iter() {
                div { key: "{n.id}", class: format!("notification-item {}", n.kind.as_str()),
                    span { class: "notification-icon", "{n.icon}" }
                    div { class: "notification-content",
                        h4 { "{n.title}" }
                        p { "{n.message}" }
                        span { class: "notification-time", "{n.time}" }
                    }
                }
            }
        }
    }
}
