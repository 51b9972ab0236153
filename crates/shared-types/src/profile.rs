use serde::{Deserialize, Serialize};

/// Placeholder shown for profile fields the backend does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

// ── Backend response ────────────────────────────────────────────────

/// Response shape of `GET /user/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Comma-separated department names.
    #[serde(default)]
    pub departments: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

// ── View record ─────────────────────────────────────────────────────

/// The signed-in employee's profile as displayed in the profile tab.
///
/// Sparse: any field may be empty, and empty fields render as "N/A".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub employee_id: String,
    pub specialization: String,
    pub bar_number: String,
    pub join_date: String,
}

impl From<UserResponse> for Profile {
    fn from(u: UserResponse) -> Self {
        Self {
            name: u.full_name.unwrap_or_default(),
            position: u.position.unwrap_or_default(),
            department: u.departments.unwrap_or_default(),
            email: u.email.unwrap_or_default(),
            phone: u.phone.unwrap_or_default(),
            employee_id: format!("CLF-{}", u.id),
            // The backend only exposes the access role; it stands in for the
            // practice specialization until a dedicated field exists.
            specialization: u.role.unwrap_or_default(),
            bar_number: NOT_AVAILABLE.to_string(),
            join_date: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Render a possibly-empty field, substituting "N/A".
pub fn or_not_available(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}
