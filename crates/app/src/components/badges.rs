use dioxus::prelude::*;
use shared_ui::{Badge, BadgeVariant};

/// Label and colour for a case status. Unknown statuses get no badge.
pub fn status_badge(status: &str) -> Option<(&'static str, BadgeVariant)> {
    match status {
        "open" => Some(("Open", BadgeVariant::Primary)),
        "active" => Some(("Active", BadgeVariant::Success)),
        "pending" => Some(("Pending", BadgeVariant::Warning)),
        "closed" => Some(("Closed", BadgeVariant::Muted)),
        _ => None,
    }
}

/// Label and colour for a case priority. Unknown priorities get no badge.
pub fn priority_badge(priority: &str) -> Option<(&'static str, BadgeVariant)> {
    match priority {
        "urgent" => Some(("Urgent", BadgeVariant::Danger)),
        "high" => Some(("High", BadgeVariant::Warning)),
        "normal" => Some(("Normal", BadgeVariant::Primary)),
        "low" => Some(("Low", BadgeVariant::Muted)),
        _ => None,
    }
}

#[component]
pub fn StatusBadge(status: String) -> Element {
    match status_badge(&status) {
        Some((label, variant)) => rsx! {
            Badge { variant, "{label}" }
        },
        None => rsx! {},
    }
}

#[component]
pub fn PriorityBadge(priority: String) -> Element {
    match priority_badge(&priority) {
        Some((label, variant)) => rsx! {
            Badge { variant, "{label}" }
        },
        None => rsx! {},
    }
}
