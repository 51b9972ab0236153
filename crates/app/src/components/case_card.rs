use super::badges::{PriorityBadge, StatusBadge};
use crate::format_helpers::{format_due, format_month_day};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdFolder};
use dioxus_free_icons::Icon;
use shared_types::{CaseRecord, NOT_AVAILABLE};

/// Court date line for a case. `None` hides the line.
pub fn court_label(case: &CaseRecord) -> Option<String> {
    case.next_court_date
        .as_deref()
        .map(|raw| format_month_day(raw).unwrap_or_else(|| NOT_AVAILABLE.to_string()))
}

/// Summary card in the case list. Clicking it reports the case id.
#[component]
pub fn CaseCard(case: CaseRecord, on_open: EventHandler<i64>) -> Element {
    let id = case.id;
    let court = court_label(&case);
    let due = format_due(case.deadline.as_deref());

    rsx! {
        div { class: "case-card", onclick: move |_| on_open.call(id),
            div { class: "case-header",
                div {
                    div { class: "case-number", "{case.case_number}" }
                    h3 { class: "case-title", "{case.title}" }
                }
                div { class: "case-badges",
                    StatusBadge { status: case.status.clone() }
                    PriorityBadge { priority: case.priority.clone() }
                }
            }
            p { class: "case-client", "Client: {case.client}" }
            div { class: "case-meta",
                span { class: "case-type",
                    Icon::<LdFolder> { icon: LdFolder, width: 14, height: 14 }
                    "{case.case_type}"
                }
                if let Some(court) = court {
                    span { class: "case-court",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                        "Court: {court}"
                    }
                }
                span { class: "case-due",
                    Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                    "Due: {due}"
                }
            }
        }
    }
}
