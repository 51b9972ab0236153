use serde::{Deserialize, Serialize};

pub const LOCATION_SHARED: &str = "Location Shared";
pub const LOCATION_UNKNOWN: &str = "Unknown";

// ── Backend response ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffResponse {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub departments: Option<String>,
    #[serde(default)]
    pub photo_file_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default)]
    pub is_online: bool,
}

/// Envelope of `GET /staff`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaffListResponse {
    #[serde(default)]
    pub staff: Vec<StaffResponse>,
}

// ── View record ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Offline,
}

impl Presence {
    pub fn from_online(is_online: bool) -> Self {
        if is_online {
            Presence::Online
        } else {
            Presence::Offline
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Presence::Online)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    /// Photo URL.
    pub photo: String,
    pub status: Presence,
    pub location: String,
    pub last_seen: String,
}

/// Location label derived from whether the member shared coordinates. A
/// latitude of exactly zero is the backend's unset value.
pub fn location_label(latitude: Option<f64>) -> &'static str {
    if latitude.filter(|l| *l != 0.0).is_some() {
        LOCATION_SHARED
    } else {
        LOCATION_UNKNOWN
    }
}
