use crate::components::CaseCard;
use crate::controller::{use_nav, CaseFilter, ModalContent};
use crate::host::{use_host, HostBridge, ImpactStyle};
use dioxus::prelude::*;
use shared_types::{CaseRecord, CASE_PRIORITIES, CASE_STATUSES};
use shared_ui::{FormSelect, Input};

/// Capitalized option label for a lowercase wire value.
fn option_label(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn CasesPane(cases: Vec<CaseRecord>) -> Element {
    let host = use_host();
    let mut nav = use_nav();
    let mut filter = use_signal(CaseFilter::default);

    let visible = filter.read().apply(&cases);

    let on_status = {
        let host = host.clone();
        move |e: Event<FormData>| {
            filter.write().status = e.value();
            host.haptic_impact(ImpactStyle::Light);
        }
    };
    let on_priority = {
        let host = host.clone();
        move |e: Event<FormData>| {
            filter.write().priority = e.value();
            host.haptic_impact(ImpactStyle::Light);
        }
    };
    let open_case = {
        let host = host.clone();
        move |id: i64| nav.open_modal(&*host, ModalContent::CaseDetails(id))
    };

    rsx! {
        div { class: "case-filters",
            Input {
                value: filter.read().search.clone(),
                on_input: move |e: FormEvent| filter.write().search = e.value(),
                placeholder: "Search cases...",
            }
            FormSelect { value: filter.read().status.clone(), onchange: on_status,
                option { value: "", "All Statuses" }
                for s in CASE_STATUSES.iter() {
                    option { key: "{s}", value: *s, "{option_label(s)}" }
                }
            }
            FormSelect { value: filter.read().priority.clone(), onchange: on_priority,
                option { value: "", "All Priorities" }
                for p in CASE_PRIORITIES.iter() {
                    option { key: "{p}", value: *p, "{option_label(p)}" }
                }
            }
        }

        if visible.is_empty() {
            p { class: "empty-state", "No cases match your filters" }
        }
        div { class: "case-list",
            for case in visible.iter() {
                CaseCard { key: "{case.id}", case: case.clone(), on_open: open_case.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_labels_capitalize() {
        assert_eq!(option_label("active"), "Active");
        assert_eq!(option_label("urgent"), "Urgent");
        assert_eq!(option_label(""), "");
    }
}
