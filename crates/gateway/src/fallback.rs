//! Built-in catalog shown when the backend cannot be reached.
//!
//! Agenda fallback is a backend-shaped response so it flows through the same
//! mapping as live data.

use shared_types::{
    AgendaResponse, CaseRecord, CourtDateResponse, Notification, Presence, Profile, StaffMember,
    TaskResponse,
};

pub fn profile() -> Profile {
    Profile {
        name: "John Doe".into(),
        position: "Senior Attorney".into(),
        department: "Litigation".into(),
        email: "john.doe@citylaw.com".into(),
        phone: "+1 (555) 123-4567".into(),
        employee_id: "CLF-1001".into(),
        specialization: "Corporate Litigation".into(),
        bar_number: "NY-12345".into(),
        join_date: "2020-03-15".into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn case(
    id: i64,
    title: &str,
    client: &str,
    case_type: &str,
    status: &str,
    priority: &str,
    next_court_date: Option<&str>,
    deadline: Option<&str>,
) -> CaseRecord {
    CaseRecord {
        id,
        case_number: format!("CL-2025-{:03}", id),
        title: title.into(),
        client: client.into(),
        case_type: case_type.into(),
        status: status.into(),
        priority: priority.into(),
        next_court_date: next_court_date.map(String::from),
        deadline: deadline.map(String::from),
    }
}

pub fn cases() -> Vec<CaseRecord> {
    vec![
        case(
            1,
            "Smith vs. Jones Corp",
            "John Smith",
            "Civil",
            "active",
            "high",
            Some("2025-12-15T09:00:00"),
            Some("2025-12-20T17:00:00"),
        ),
        case(
            2,
            "State vs. Doe",
            "Jane Doe",
            "Criminal",
            "pending",
            "urgent",
            None,
            Some("2025-12-10T17:00:00"),
        ),
        case(
            3,
            "Real Estate Merger",
            "Tech Properties",
            "Corporate",
            "active",
            "normal",
            None,
            Some("2026-01-15T17:00:00"),
        ),
        case(
            4,
            "Family Trust Setup",
            "Robert Wilson",
            "Family",
            "closed",
            "low",
            None,
            None,
        ),
    ]
}

pub fn agenda_response() -> AgendaResponse {
    let court = |hearing_date: &str, court_name: &str, purpose: &str| CourtDateResponse {
        id: None,
        case_number: None,
        court_name: court_name.into(),
        hearing_date: hearing_date.into(),
        purpose: Some(purpose.into()),
    };
    let task = |title: &str| TaskResponse {
        id: None,
        title: title.into(),
        due_date: None,
        status: None,
    };

    AgendaResponse {
        court_dates: vec![
            court("2025-12-12T10:00:00", "District Court", "Preliminary Hearing"),
            court(
                "2025-12-15T14:30:00",
                "Superior Court",
                "Case Management Conference",
            ),
        ],
        tasks: vec![
            task("Draft Motion to Dismiss (Smith vs. Jones)"),
            task("Client Meeting: Tech Properties"),
        ],
        time_entries: Vec::new(),
        total_hours: 142.5,
    }
}

/// No canned notifications: an unreachable backend shows an empty list.
pub fn notifications() -> Vec<Notification> {
    Vec::new()
}

pub fn staff() -> Vec<StaffMember> {
    let member = |id: i64, name: &str, role: &str, color: &str, online: bool, location: &str, last_seen: &str| {
        StaffMember {
            id,
            name: name.into(),
            role: role.into(),
            photo: format!(
                "https://ui-avatars.com/api/?name={}&background={}&color=fff",
                name.replace(' ', "+"),
                color
            ),
            status: Presence::from_online(online),
            location: location.into(),
            last_seen: last_seen.into(),
        }
    };

    vec![
        member(1, "Sarah Parker", "Senior Partner", "3b82f6", true, "Office 301", "Just now"),
        member(2, "James Wilson", "Associate", "10b981", false, "Unknown", "15 mins ago"),
        member(3, "Emily Chen", "Paralegal", "f59e0b", true, "Court House", "5 mins ago"),
        member(4, "Michael Ross", "Junior Associate", "ef4444", false, "Meeting Room 2", "1 hour ago"),
    ]
}
