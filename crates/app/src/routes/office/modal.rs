use crate::components::{CaseDetails, DepartmentDetails};
use crate::controller::{use_nav, ModalContent};
use crate::forms::{AgendaItemForm, LeaveRequestForm, NewCaseForm, TimeEntryForm};
use crate::host::use_host;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::find_department;

/// What goes inside the modal for each kind of content.
#[component]
pub fn ModalBody(content: ModalContent) -> Element {
    let host = use_host();
    let mut nav = use_nav();
    let session = use_session();

    match content {
        ModalContent::NewCase => rsx! { NewCaseForm {} },
        ModalContent::TimeEntry { case_id } => rsx! { TimeEntryForm { case_id } },
        ModalContent::LeaveRequest => rsx! { LeaveRequestForm {} },
        ModalContent::AddAgenda => rsx! { AgendaItemForm {} },
        ModalContent::CaseDetails(id) => {
            let case = session
                .snapshot
                .read()
                .cases
                .value
                .iter()
                .find(|c| c.id == id)
                .cloned();
            match case {
                Some(case) => rsx! {
                    CaseDetails {
                        case,
                        on_log_time: move |case_id: i64| {
                            nav.open_modal(&*host, ModalContent::TimeEntry { case_id: Some(case_id) })
                        },
                    }
                },
                None => rsx! {
                    p { class: "empty-state", "This case is no longer available." }
                },
            }
        }
        ModalContent::Department(name) => match find_department(name) {
            Some(dept) => rsx! { DepartmentDetails { dept: *dept } },
            None => rsx! {},
        },
    }
}
