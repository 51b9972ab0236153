use dioxus::prelude::*;
use shared_types::StaffMember;

/// Directory of colleagues with their presence.
#[component]
pub fn StaffGrid(staff: Vec<StaffMember>) -> Element {
    if staff.is_empty() {
        return rsx! {
            p { class: "empty-state", "No staff members found" }
        };
    }

    rsx! {
        div { class: "staff-grid",
            for member in staff.iter() {
                div {
                    key: "{member.id}",
                    class: if member.status.is_online() { "staff-card online" } else { "staff-card" },
                    div { class: "staff-photo",
                        img { src: "{member.photo}", alt: "{member.name}" }
                        span { class: "status-indicator" }
                    }
                    div { class: "staff-info",
                        h4 { "{member.name}" }
                        p { class: "staff-role", "{member.role}" }
                        p { class: "staff-location", "{member.location}" }
                        p { class: "staff-last-seen", "Last seen: {member.last_seen}" }
                    }
                }
            }
        }
    }
}
