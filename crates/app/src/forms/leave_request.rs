use super::submit_from_form;
use crate::host::use_host;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{LeaveRequestAction, OfficeAction, LEAVE_TYPES};
use shared_ui::{Form, FormMissing, FormSelect, Input, Textarea};

#[component]
pub fn LeaveRequestForm() -> Element {
    let host = use_host();
    let session = use_session();

    let mut leave_type = use_signal(|| LEAVE_TYPES[0].to_string());
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let missing = use_signal(Vec::<String>::new);

    let handle_submit = move |_: FormEvent| {
        let action = OfficeAction::LeaveRequest(LeaveRequestAction {
            leave_type: leave_type.read().clone(),
            start_date: start_date.read().clone(),
            end_date: end_date.read().clone(),
            reason: reason.read().clone(),
        });
        submit_from_form(&*host, session, missing, action);
    };

    rsx! {
        Form { onsubmit: handle_submit,
            FormSelect {
                label: "Leave Type",
                value: leave_type.read().clone(),
                onchange: move |e: Event<FormData>| leave_type.set(e.value()),
                for t in LEAVE_TYPES.iter() {
                    option { key: "{t}", value: *t, "{t}" }
                }
            }
            Input {
                label: "Start Date",
                input_type: "date",
                value: start_date.read().clone(),
                on_input: move |e: FormEvent| start_date.set(e.value()),
                required: true,
            }
            Input {
                label: "End Date",
                input_type: "date",
                value: end_date.read().clone(),
                on_input: move |e: FormEvent| end_date.set(e.value()),
                required: true,
            }
            Textarea {
                label: "Reason",
                value: reason.read().clone(),
                on_input: move |e: FormEvent| reason.set(e.value()),
                placeholder: "Optional",
            }
            FormMissing { fields: missing.read().clone() }
            button { class: "button", "data-style": "primary", r#type: "submit", "Submit Request" }
        }
    }
}
