//! Action forms. Each form collects its fields into an [`OfficeAction`],
//! checks the required ones, then hands the JSON payload to the host and
//! closes the app.

mod agenda_item;
mod leave_request;
mod new_case;
mod time_entry;

pub use agenda_item::AgendaItemForm;
pub use leave_request::LeaveRequestForm;
pub use new_case::NewCaseForm;
pub use time_entry::TimeEntryForm;

use crate::host::HostBridge;
use crate::session::OfficeSession;
use dioxus::prelude::*;
use shared_types::{AppError, OfficeAction};

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Payload delivered and the app asked to close.
    Sent,
    /// Nothing was sent; these required fields are blank.
    Blocked(Vec<&'static str>),
}

/// Validate `action` and deliver it. Blank required fields block delivery
/// and no host call is made.
pub fn submit_action(host: &dyn HostBridge, action: &OfficeAction) -> Result<Submission, AppError> {
    let missing = action.missing_required();
    if !missing.is_empty() {
        tracing::debug!(action = action.tag(), ?missing, "Submission blocked");
        return Ok(Submission::Blocked(missing));
    }
    let payload = serde_json::to_string(action)?;
    tracing::info!(action = action.tag(), "Sending action to host");
    host.send_data(&payload);
    host.close();
    Ok(Submission::Sent)
}

/// Human label for a payload field name.
pub fn field_label(field: &str) -> &'static str {
    match field {
        "case_number" => "Case Number",
        "client_name" => "Client Name",
        "assigned_to" => "Assigned To",
        "duration" => "Duration",
        "description" => "Description",
        "start_date" => "Start Date",
        "end_date" => "End Date",
        "court_name" => "Court Name",
        "date_time" => "Date & Time",
        "purpose" => "Purpose",
        "title" => "Title",
        "deadline" => "Deadline",
        _ => "Required field",
    }
}

/// Shared submit handling for the form components. On success the session
/// stops accepting fetch results, since the host is closing the app.
pub(crate) fn submit_from_form(
    host: &dyn HostBridge,
    mut session: OfficeSession,
    mut missing: Signal<Vec<String>>,
    action: OfficeAction,
) {
    match submit_action(host, &action) {
        Ok(Submission::Sent) => {
            missing.set(Vec::new());
            session.mark_closed();
        }
        Ok(Submission::Blocked(fields)) => {
            missing.set(fields.iter().map(|f| field_label(f).to_string()).collect());
        }
        Err(e) => {
            tracing::error!(action = action.tag(), error = %e, "Could not encode action");
        }
    }
}
