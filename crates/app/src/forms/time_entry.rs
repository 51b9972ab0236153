use super::submit_from_form;
use crate::host::use_host;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{CaseRecord, OfficeAction, TimeEntryAction, ACTIVITY_TYPES};
use shared_ui::{Form, FormMissing, FormSelect, Input, Textarea};

/// Case preselected in the select: the requested one when present in the
/// list, otherwise the first case.
pub fn initial_case_id(cases: &[CaseRecord], requested: Option<i64>) -> String {
    requested
        .filter(|id| cases.iter().any(|c| c.id == *id))
        .or_else(|| cases.first().map(|c| c.id))
        .map(|id| id.to_string())
        .unwrap_or_default()
}

#[component]
pub fn TimeEntryForm(case_id: Option<i64>) -> Element {
    let host = use_host();
    let session = use_session();
    let cases = session.snapshot.read().cases.value.clone();

    let mut selected_case = use_signal(|| initial_case_id(&cases, case_id));
    let mut duration = use_signal(String::new);
    let mut activity = use_signal(|| ACTIVITY_TYPES[0].to_string());
    let mut description = use_signal(String::new);
    let missing = use_signal(Vec::<String>::new);

    let handle_submit = move |_: FormEvent| {
        let action = OfficeAction::LogTime(TimeEntryAction {
            case_id: selected_case.read().clone(),
            duration: duration.read().clone(),
            activity_type: activity.read().clone(),
            description: description.read().clone(),
        });
        submit_from_form(&*host, session, missing, action);
    };

    rsx! {
        Form { onsubmit: handle_submit,
            FormSelect {
                label: "Case",
                value: selected_case.read().clone(),
                onchange: move |e: Event<FormData>| selected_case.set(e.value()),
                for case in cases.iter() {
                    option { key: "{case.id}", value: "{case.id}", "{case.case_number} - {case.title}" }
                }
            }
            Input {
                label: "Duration (hours)",
                input_type: "number",
                step: "0.25",
                value: duration.read().clone(),
                on_input: move |e: FormEvent| duration.set(e.value()),
                placeholder: "1.5",
                required: true,
            }
            FormSelect {
                label: "Activity",
                value: activity.read().clone(),
                onchange: move |e: Event<FormData>| activity.set(e.value()),
                for a in ACTIVITY_TYPES.iter() {
                    option { key: "{a}", value: *a, "{a}" }
                }
            }
            Textarea {
                label: "Description",
                value: description.read().clone(),
                on_input: move |e: FormEvent| description.set(e.value()),
                placeholder: "What did you work on?",
                required: true,
            }
            FormMissing { fields: missing.read().clone() }
            button { class: "button", "data-style": "primary", r#type: "submit", "Log Time" }
        }
    }
}
