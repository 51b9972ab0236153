use gateway::api::fetch_notifications;
use pretty_assertions::assert_eq;
use shared_types::NotificationKind;

use crate::common::{client_for, dead_base_url, office_router, spawn_backend};

#[tokio::test]
async fn live_notifications_are_classified() {
    let base = spawn_backend(office_router()).await;
    let client = client_for(&base);

    let fetched = fetch_notifications(&client).await;
    assert!(fetched.is_live());

    let list = fetched.into_value();
    assert_eq!(list.len(), 2);

    assert_eq!(list[0].id, "1");
    assert_eq!(list[0].kind, NotificationKind::Alert);
    assert_eq!(list[0].icon, "🚨");
    assert!(list[0].urgent);
    assert_eq!(list[0].time, "02:30 PM");

    assert_eq!(list[1].kind, NotificationKind::Info);
    assert_eq!(list[1].icon, "📢");
    assert!(!list[1].urgent);
    assert_eq!(list[1].time, "yesterday");
}

#[tokio::test]
async fn unreachable_backend_yields_no_notifications() {
    let client = client_for(&dead_base_url().await);

    let fetched = fetch_notifications(&client).await;
    assert!(!fetched.is_live());
    assert!(fetched.value().is_empty());
}
