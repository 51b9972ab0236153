use super::submit_from_form;
use crate::host::use_host;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{NewCaseAction, OfficeAction, NEW_CASE_DEPARTMENTS, NEW_CASE_PRIORITIES, NEW_CASE_TYPES};
use shared_ui::{Form, FormMissing, FormSelect, Input};

#[component]
pub fn NewCaseForm() -> Element {
    let host = use_host();
    let session = use_session();

    let mut case_number = use_signal(String::new);
    let mut client_name = use_signal(String::new);
    let mut case_type = use_signal(|| NEW_CASE_TYPES[0].to_string());
    let mut department = use_signal(|| NEW_CASE_DEPARTMENTS[0].to_string());
    let mut priority = use_signal(|| NEW_CASE_PRIORITIES[0].to_string());
    let mut assigned_to = use_signal(String::new);
    let missing = use_signal(Vec::<String>::new);

    let handle_submit = move |_: FormEvent| {
        let action = OfficeAction::NewCase(NewCaseAction {
            case_number: case_number.read().clone(),
            client_name: client_name.read().clone(),
            case_type: case_type.read().clone(),
            department: department.read().clone(),
            priority: priority.read().clone(),
            assigned_to: assigned_to.read().clone(),
        });
        submit_from_form(&*host, session, missing, action);
    };

    rsx! {
        Form { onsubmit: handle_submit,
            Input {
                label: "Case Number",
                value: case_number.read().clone(),
                on_input: move |e: FormEvent| case_number.set(e.value()),
                placeholder: "CL-2025-001",
                required: true,
            }
            Input {
                label: "Client Name",
                value: client_name.read().clone(),
                on_input: move |e: FormEvent| client_name.set(e.value()),
                required: true,
            }
            FormSelect {
                label: "Case Type",
                value: case_type.read().clone(),
                onchange: move |e: Event<FormData>| case_type.set(e.value()),
                for t in NEW_CASE_TYPES.iter() {
                    option { key: "{t}", value: *t, "{t}" }
                }
            }
            FormSelect {
                label: "Department",
                value: department.read().clone(),
                onchange: move |e: Event<FormData>| department.set(e.value()),
                for d in NEW_CASE_DEPARTMENTS.iter() {
                    option { key: "{d}", value: *d, "{d}" }
                }
            }
            FormSelect {
                label: "Priority",
                value: priority.read().clone(),
                onchange: move |e: Event<FormData>| priority.set(e.value()),
                for p in NEW_CASE_PRIORITIES.iter() {
                    option { key: "{p}", value: *p, "{p}" }
                }
            }
            Input {
                label: "Assigned To",
                value: assigned_to.read().clone(),
                on_input: move |e: FormEvent| assigned_to.set(e.value()),
                placeholder: "Attorney name",
                required: true,
            }
            FormMissing { fields: missing.read().clone() }
            button { class: "button", "data-style": "primary", r#type: "submit", "Create Case" }
        }
    }
}
