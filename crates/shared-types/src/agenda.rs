use serde::{Deserialize, Serialize};

/// Purpose used when a court date has none recorded.
pub const DEFAULT_HEARING_PURPOSE: &str = "Hearing";

/// Time label for tasks, which have no time of day.
pub const ANYTIME: &str = "Anytime";

// ── Backend response ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtDateResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub case_number: Option<String>,
    pub court_name: String,
    pub hearing_date: String,
    #[serde(default)]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryResponse {
    #[serde(default)]
    pub id: Option<i64>,
    /// Hours.
    pub duration: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Response shape of `GET /agenda/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgendaResponse {
    #[serde(default)]
    pub court_dates: Vec<CourtDateResponse>,
    #[serde(default)]
    pub tasks: Vec<TaskResponse>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntryResponse>,
    #[serde(default)]
    pub total_hours: f64,
}

// ── View records ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaKind {
    Court,
    Deadline,
}

impl AgendaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgendaKind::Court => "court",
            AgendaKind::Deadline => "deadline",
        }
    }
}

/// One display row of today's agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    /// Display time, e.g. "10:00 AM" or "Anytime".
    pub time: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AgendaKind,
}

impl AgendaItem {
    /// Row for a court date. `time` is the already-formatted hearing time.
    pub fn court(time: String, court: &CourtDateResponse) -> Self {
        let purpose = court
            .purpose
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_HEARING_PURPOSE);
        Self {
            time,
            title: "Court Appearance".to_string(),
            description: format!("{} - {}", court.court_name, purpose),
            kind: AgendaKind::Court,
        }
    }

    /// Row for an open task.
    pub fn task(task: &TaskResponse) -> Self {
        Self {
            time: ANYTIME.to_string(),
            title: "Task".to_string(),
            description: task.title.clone(),
            kind: AgendaKind::Deadline,
        }
    }
}

/// Agenda rows plus the aggregates derived from the same response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgendaFeed {
    pub items: Vec<AgendaItem>,
    pub court_dates: usize,
    pub billable_hours: f64,
}
