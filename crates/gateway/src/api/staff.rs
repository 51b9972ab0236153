use crate::client::GatewayClient;
use crate::fallback;
use crate::format::time_of_day;
use shared_types::{location_label, Fetched, Presence, StaffListResponse, StaffMember, StaffResponse};

const AVATAR_BACKGROUND: &str = "3b82f6";
const UNKNOWN_LAST_SEEN: &str = "Unknown";

/// Generated avatar image for members without a photo.
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={}&color=fff",
        urlencoding::encode(name),
        AVATAR_BACKGROUND
    )
}

fn photo_url(member: &StaffResponse, photo_file_base: &str) -> String {
    match member.photo_file_id.as_deref().filter(|id| !id.is_empty()) {
        Some(file_id) => format!("{}/{}", photo_file_base.trim_end_matches('/'), file_id),
        None => avatar_url(&member.full_name),
    }
}

pub fn map_staff(response: StaffListResponse, photo_file_base: &str) -> Vec<StaffMember> {
    response
        .staff
        .into_iter()
        .map(|s| StaffMember {
            id: s.id,
            photo: photo_url(&s, photo_file_base),
            role: s.position.clone().unwrap_or_default(),
            status: Presence::from_online(s.is_online),
            location: location_label(s.latitude).to_string(),
            last_seen: s
                .last_seen
                .as_deref()
                .and_then(time_of_day)
                .unwrap_or_else(|| UNKNOWN_LAST_SEEN.to_string()),
            name: s.full_name,
        })
        .collect()
}

/// `GET /staff`. Not scoped to a user.
pub async fn fetch_staff(client: &GatewayClient) -> Fetched<Vec<StaffMember>> {
    let result = client.get_json::<StaffListResponse>("staff").await;
    let photo_file_base = client.config().photo_file_base.clone();
    super::settle(
        "staff",
        result,
        |body| map_staff(body, &photo_file_base),
        fallback::staff,
    )
}
