use serde::{Deserialize, Serialize};

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeStats {
    /// Always the number of current cases with status "active".
    pub active_cases: usize,
    pub court_dates: usize,
    pub billable_hours: f64,
}
