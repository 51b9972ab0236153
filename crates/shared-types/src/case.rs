use serde::{Deserialize, Serialize};

// ── Known values ────────────────────────────────────────────────────

/// Case status values the backend is known to emit.
pub const CASE_STATUSES: &[&str] = &["open", "active", "pending", "closed"];

/// Case priority values the backend is known to emit.
pub const CASE_PRIORITIES: &[&str] = &["urgent", "high", "normal", "low"];

/// Status value counted by the "Active Cases" stat.
pub const ACTIVE_STATUS: &str = "active";

// ── Backend response ────────────────────────────────────────────────

/// One case as returned by `GET /cases/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResponse {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub filing_date: Option<String>,
    #[serde(default)]
    pub next_court_date: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Envelope of `GET /cases/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaseListResponse {
    #[serde(default)]
    pub cases: Vec<CaseResponse>,
}

// ── View record ─────────────────────────────────────────────────────

/// A case assigned to the signed-in employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    pub client: String,
    #[serde(rename = "type")]
    pub case_type: String,
    pub status: String,
    pub priority: String,
    /// ISO timestamp of the next hearing, if one is scheduled.
    pub next_court_date: Option<String>,
    /// ISO timestamp of the filing deadline, if any.
    pub deadline: Option<String>,
}

impl CaseRecord {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

impl From<CaseResponse> for CaseRecord {
    fn from(c: CaseResponse) -> Self {
        Self {
            id: c.id,
            case_number: c.case_number,
            title: c.title,
            client: c.client_name.unwrap_or_default(),
            case_type: c.case_type.unwrap_or_default(),
            status: c.status,
            priority: c.priority,
            next_court_date: c.next_court_date,
            deadline: c.deadline,
        }
    }
}

/// Number of cases whose status is exactly "active".
pub fn count_active(cases: &[CaseRecord]) -> usize {
    cases.iter().filter(|c| c.is_active()).count()
}
