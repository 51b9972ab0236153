use serde::{Deserialize, Serialize};

// ── Option lists offered by the action forms ────────────────────────

pub const NEW_CASE_TYPES: &[&str] = &["Litigation", "Corporate", "Family", "Criminal"];

pub const NEW_CASE_DEPARTMENTS: &[&str] = &[
    "Litigation Department",
    "Corporate Law",
    "Family Law",
    "Criminal Defense",
];

pub const NEW_CASE_PRIORITIES: &[&str] = &["Normal", "High", "Urgent", "Low"];

pub const ACTIVITY_TYPES: &[&str] = &[
    "Research",
    "Court Appearance",
    "Client Meeting",
    "Document Drafting",
    "Case Preparation",
];

pub const LEAVE_TYPES: &[&str] = &["Vacation", "Sick Leave", "Personal Leave", "Emergency Leave"];

/// `(value, label)` pairs for the agenda task priority select.
pub const TASK_PRIORITIES: &[(&str, &str)] = &[("high", "High"), ("medium", "Medium"), ("low", "Low")];

// ── Payloads ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewCaseAction {
    pub case_number: String,
    pub client_name: String,
    pub case_type: String,
    pub department: String,
    pub priority: String,
    pub assigned_to: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeEntryAction {
    /// Id of the case the time is billed to.
    pub case_id: String,
    /// Hours, as typed.
    pub duration: String,
    pub activity_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeaveRequestAction {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    /// Optional.
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourtDateEntry {
    pub case_number: String,
    pub court_name: String,
    pub date_time: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskEntry {
    pub title: String,
    pub deadline: String,
    pub priority: String,
}

/// New agenda entry, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AgendaEntry {
    Court(CourtDateEntry),
    Task(TaskEntry),
}

/// A structured action handed to the host, discriminated by `action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OfficeAction {
    NewCase(NewCaseAction),
    LogTime(TimeEntryAction),
    LeaveRequest(LeaveRequestAction),
    NewAgendaItem(AgendaEntry),
}

impl OfficeAction {
    /// Wire value of the `action` discriminator.
    pub fn tag(&self) -> &'static str {
        match self {
            OfficeAction::NewCase(_) => "new_case",
            OfficeAction::LogTime(_) => "log_time",
            OfficeAction::LeaveRequest(_) => "leave_request",
            OfficeAction::NewAgendaItem(_) => "new_agenda_item",
        }
    }

    /// Names of required fields that are blank. Empty means the action may
    /// be submitted.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let fields: Vec<(&'static str, &str)> = match self {
            OfficeAction::NewCase(a) => vec![
                ("case_number", &a.case_number),
                ("client_name", &a.client_name),
                ("assigned_to", &a.assigned_to),
            ],
            OfficeAction::LogTime(a) => {
                vec![("duration", &a.duration), ("description", &a.description)]
            }
            OfficeAction::LeaveRequest(a) => {
                vec![("start_date", &a.start_date), ("end_date", &a.end_date)]
            }
            OfficeAction::NewAgendaItem(AgendaEntry::Court(c)) => vec![
                ("case_number", &c.case_number),
                ("court_name", &c.court_name),
                ("date_time", &c.date_time),
                ("purpose", &c.purpose),
            ],
            OfficeAction::NewAgendaItem(AgendaEntry::Task(t)) => {
                vec![("title", &t.title), ("deadline", &t.deadline)]
            }
        };
        fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}
