use super::submit_from_form;
use crate::controller::AgendaFormMode;
use crate::host::use_host;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{AgendaEntry, CourtDateEntry, OfficeAction, TaskEntry, TASK_PRIORITIES};
use shared_ui::{Button, ButtonVariant, Form, FormMissing, FormSelect, Input};

/// Court date or task. Only the active group's fields are required.
#[component]
pub fn AgendaItemForm(#[props(default)] initial_mode: AgendaFormMode) -> Element {
    let host = use_host();
    let session = use_session();
    let mut mode = use_signal(|| initial_mode);

    let mut case_number = use_signal(String::new);
    let mut court_name = use_signal(String::new);
    let mut date_time = use_signal(String::new);
    let mut purpose = use_signal(String::new);

    let mut title = use_signal(String::new);
    let mut deadline = use_signal(String::new);
    let mut task_priority = use_signal(|| TASK_PRIORITIES[1].0.to_string());

    let mut missing = use_signal(Vec::<String>::new);

    let handle_submit = move |_: FormEvent| {
        let entry = match *mode.read() {
            AgendaFormMode::Court => AgendaEntry::Court(CourtDateEntry {
                case_number: case_number.read().clone(),
                court_name: court_name.read().clone(),
                date_time: date_time.read().clone(),
                purpose: purpose.read().clone(),
            }),
            AgendaFormMode::Task => AgendaEntry::Task(TaskEntry {
                title: title.read().clone(),
                deadline: deadline.read().clone(),
                priority: task_priority.read().clone(),
            }),
        };
        submit_from_form(&*host, session, missing, OfficeAction::NewAgendaItem(entry));
    };

    let current = *mode.read();
    let mut switch_to = move |next: AgendaFormMode| {
        if *mode.read() != next {
            mode.set(next);
            missing.set(Vec::new());
        }
    };

    rsx! {
        div { class: "mode-toggle",
            Button {
                variant: ButtonVariant::Small,
                class: if current == AgendaFormMode::Court { "mode-btn active" } else { "mode-btn" },
                onclick: move |_| switch_to(AgendaFormMode::Court),
                "Court Date"
            }
            Button {
                variant: ButtonVariant::Small,
                class: if current == AgendaFormMode::Task { "mode-btn active" } else { "mode-btn" },
                onclick: move |_| switch_to(AgendaFormMode::Task),
                "Task"
            }
        }
        Form { onsubmit: handle_submit,
            match current {
                AgendaFormMode::Court => rsx! {
                    Input {
                        label: "Case Number",
                        value: case_number.read().clone(),
                        on_input: move |e: FormEvent| case_number.set(e.value()),
                        required: current.is_required("case_number"),
                    }
                    Input {
                        label: "Court Name",
                        value: court_name.read().clone(),
                        on_input: move |e: FormEvent| court_name.set(e.value()),
                        required: current.is_required("court_name"),
                    }
                    Input {
                        label: "Date & Time",
                        input_type: "datetime-local",
                        value: date_time.read().clone(),
                        on_input: move |e: FormEvent| date_time.set(e.value()),
                        required: current.is_required("date_time"),
                    }
                    Input {
                        label: "Purpose",
                        value: purpose.read().clone(),
                        on_input: move |e: FormEvent| purpose.set(e.value()),
                        placeholder: "Hearing",
                        required: current.is_required("purpose"),
                    }
                },
                AgendaFormMode::Task => rsx! {
                    Input {
                        label: "Title",
                        value: title.read().clone(),
                        on_input: move |e: FormEvent| title.set(e.value()),
                        required: current.is_required("title"),
                    }
                    Input {
                        label: "Deadline",
                        input_type: "date",
                        value: deadline.read().clone(),
                        on_input: move |e: FormEvent| deadline.set(e.value()),
                        required: current.is_required("deadline"),
                    }
                    FormSelect {
                        label: "Priority",
                        value: task_priority.read().clone(),
                        onchange: move |e: Event<FormData>| task_priority.set(e.value()),
                        for (value, label) in TASK_PRIORITIES.iter() {
                            option { key: "{value}", value: *value, "{label}" }
                        }
                    }
                },
            }
            FormMissing { fields: missing.read().clone() }
            button { class: "button", "data-style": "primary", r#type: "submit", "Add to Agenda" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render;
    use crate::host::{HostHandle, RecordingHost};
    use crate::session::OfficeSession;
    use gateway::UserId;

    #[component]
    fn WithContext(initial_mode: AgendaFormMode) -> Element {
        use_context_provider(|| HostHandle::new(RecordingHost::default()));
        use_context_provider(|| OfficeSession::new(UserId::new(1)));
        rsx! {
            AgendaItemForm { initial_mode }
        }
    }

    /// `(type, required)` for every `<input>` in render order.
    fn inputs(html: &str) -> Vec<(String, bool)> {
        html.split("<input")
            .skip(1)
            .map(|rest| {
                let tag = &rest[..rest.find('>').unwrap_or(rest.len())];
                let kind = tag
                    .split("type=\"")
                    .nth(1)
                    .and_then(|t| t.split('"').next())
                    .unwrap_or_default()
                    .to_string();
                let required = tag.contains("required")
                    && !tag.contains("required=false")
                    && !tag.contains("required=\"false\"");
                (kind, required)
            })
            .collect()
    }

    fn owned(expected: &[(&str, bool)]) -> Vec<(String, bool)> {
        expected.iter().map(|(k, r)| (k.to_string(), *r)).collect()
    }

    #[test]
    fn court_mode_requires_the_court_fields() {
        let html = render(rsx! {
            WithContext { initial_mode: AgendaFormMode::Court }
        });
        assert_eq!(
            inputs(&html),
            owned(&[
                ("text", true),
                ("text", true),
                ("datetime-local", true),
                ("text", true),
            ])
        );
        assert!(html.contains("Case Number"));
        assert!(html.contains("Court Name"));
        assert!(html.contains("Purpose"));
        assert!(!html.contains(">Title<"));
        assert!(!html.contains(">Deadline<"));
        assert!(html.contains("mode-btn active"));
    }

    #[test]
    fn task_mode_requires_only_title_and_deadline() {
        let html = render(rsx! {
            WithContext { initial_mode: AgendaFormMode::Task }
        });
        assert_eq!(inputs(&html), owned(&[("text", true), ("date", true)]));
        assert!(html.contains(">Title<"));
        assert!(html.contains(">Deadline<"));
        assert!(!html.contains("Court Name"));
        assert!(!html.contains("Case Number"));
    }

    #[test]
    fn default_mode_is_court() {
        let html = render(rsx! {
            WithContext { initial_mode: AgendaFormMode::default() }
        });
        assert_eq!(inputs(&html).len(), AgendaFormMode::Court.required_fields().len());
    }
}
