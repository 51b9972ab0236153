use crate::client::GatewayClient;
use crate::fallback;
use crate::format::time_of_day;
use shared_types::{Fetched, Notification, NotificationListResponse};

pub fn map_notifications(response: NotificationListResponse) -> Vec<Notification> {
    response
        .notifications
        .into_iter()
        .map(|n| {
            let time = time_of_day(&n.created_at).unwrap_or_else(|| n.created_at.clone());
            Notification::from_response(n, time)
        })
        .collect()
}

/// `GET /notifications`. Not scoped to a user.
pub async fn fetch_notifications(client: &GatewayClient) -> Fetched<Vec<Notification>> {
    let result = client
        .get_json::<NotificationListResponse>("notifications")
        .await;
    super::settle(
        "notifications",
        result,
        map_notifications,
        fallback::notifications,
    )
}
