use super::badges::{PriorityBadge, StatusBadge};
use super::case_card::court_label;
use crate::format_helpers::format_due;
use dioxus::prelude::*;
use shared_types::{or_not_available, CaseRecord};
use shared_ui::{Button, ButtonVariant};

/// Full view of one case, with a shortcut to log time against it.
#[component]
pub fn CaseDetails(case: CaseRecord, on_log_time: EventHandler<i64>) -> Element {
    let id = case.id;
    let court = court_label(&case).unwrap_or_else(|| "Not scheduled".to_string());
    let due = format_due(case.deadline.as_deref());

    rsx! {
        div { class: "details-view",
            h3 { class: "details-title", "{case.title}" }
            div { class: "case-badges",
                StatusBadge { status: case.status.clone() }
                PriorityBadge { priority: case.priority.clone() }
            }
            dl { class: "details-list",
                div { class: "details-row",
                    dt { "Client" }
                    dd { "{or_not_available(&case.client)}" }
                }
                div { class: "details-row",
                    dt { "Type" }
                    dd { "{or_not_available(&case.case_type)}" }
                }
                div { class: "details-row",
                    dt { "Next Court Date" }
                    dd { "{court}" }
                }
                div { class: "details-row",
                    dt { "Deadline" }
                    dd { "{due}" }
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_log_time.call(id),
                "Log Time"
            }
        }
    }
}
