use gateway::api::fetch_staff;
use pretty_assertions::assert_eq;
use shared_types::Presence;

use crate::common::{client_for, dead_base_url, office_router, spawn_backend, PHOTO_BASE};

#[tokio::test]
async fn live_staff_resolve_photos_and_presence() {
    let base = spawn_backend(office_router()).await;
    let client = client_for(&base);

    let fetched = fetch_staff(&client).await;
    assert!(fetched.is_live());

    let staff = fetched.into_value();
    assert_eq!(staff.len(), 2);

    let ann = &staff[0];
    assert_eq!(ann.photo, format!("{}/photo-5", PHOTO_BASE));
    assert_eq!(ann.status, Presence::Online);
    assert_eq!(ann.location, "Location Shared");
    assert_eq!(ann.last_seen, "08:05 AM");
    assert_eq!(ann.role, "Paralegal");

    let bo = &staff[1];
    assert_eq!(
        bo.photo,
        "https://ui-avatars.com/api/?name=Bo%20Chen&background=3b82f6&color=fff"
    );
    assert_eq!(bo.status, Presence::Offline);
    assert_eq!(bo.location, "Unknown");
    assert_eq!(bo.last_seen, "Unknown");
    assert_eq!(bo.role, "");
}

#[tokio::test]
async fn unreachable_backend_yields_fallback_directory() {
    let client = client_for(&dead_base_url().await);

    let fetched = fetch_staff(&client).await;
    assert!(!fetched.is_live());
    assert_eq!(fetched.value(), &gateway::fallback::staff());
}
