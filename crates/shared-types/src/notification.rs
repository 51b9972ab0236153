use serde::{Deserialize, Serialize};

/// Backend priority that marks a notification as urgent.
pub const URGENT_PRIORITY: &str = "urgent";

pub const URGENT_ICON: &str = "🚨";
pub const INFO_ICON: &str = "📢";

/// Id reserved for the synthetic broadcast notification.
pub const BROADCAST_ID: &str = "broadcast";

// ── Backend response ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub notification_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    pub created_at: String,
}

/// Envelope of `GET /notifications`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationListResponse {
    #[serde(default)]
    pub notifications: Vec<NotificationResponse>,
}

// ── View record ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Info,
    /// Only used by the broadcast injected from launch parameters.
    Urgent,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Alert => "alert",
            NotificationKind::Info => "info",
            NotificationKind::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Display time, e.g. "09:30 AM".
    pub time: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub icon: String,
    pub urgent: bool,
}

impl Notification {
    /// Map a backend notification. `time` is the already-formatted
    /// creation time.
    pub fn from_response(n: NotificationResponse, time: String) -> Self {
        let urgent = n.priority.as_deref() == Some(URGENT_PRIORITY);
        Self {
            id: n.id.to_string(),
            title: n.title,
            message: n.message,
            time,
            kind: if urgent {
                NotificationKind::Alert
            } else {
                NotificationKind::Info
            },
            icon: if urgent { URGENT_ICON } else { INFO_ICON }.to_string(),
            urgent,
        }
    }

    /// The system broadcast passed to the mini app through its launch URL.
    pub fn broadcast(message: String, time: Option<String>) -> Self {
        Self {
            id: BROADCAST_ID.to_string(),
            title: format!("{INFO_ICON} System Broadcast"),
            message,
            time: time
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Just now".to_string()),
            kind: NotificationKind::Urgent,
            icon: INFO_ICON.to_string(),
            urgent: true,
        }
    }
}

/// Notifications to display: the broadcast (if any) first, then the
/// fetched list.
pub fn with_broadcast(fetched: &[Notification], broadcast: Option<&Notification>) -> Vec<Notification> {
    broadcast
        .into_iter()
        .chain(fetched.iter())
        .cloned()
        .collect()
}
