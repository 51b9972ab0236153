use axum::http::StatusCode;
use gateway::{fetch_all, OfficeSnapshot, UserId};
use pretty_assertions::assert_eq;
use shared_types::{count_active, Origin};

use crate::common::{client_for, dead_base_url, failing_router, office_router, spawn_backend};

#[tokio::test]
async fn live_batch_fills_every_slot() {
    let base = spawn_backend(office_router()).await;
    let client = client_for(&base);

    let batch = fetch_all(&client, UserId::new(42)).await;
    assert!(batch.fallback_slots().is_empty());

    let snapshot = OfficeSnapshot::initial().merge(batch);
    assert!(snapshot.is_loaded());
    assert!(!snapshot.has_fallback_data());
    assert_eq!(snapshot.cases.origin, Origin::Live);
    assert_eq!(snapshot.stats.active_cases, 2);
    assert_eq!(snapshot.stats.court_dates, 2);
    assert_eq!(snapshot.stats.billable_hours, 12.5);
    assert_eq!(
        snapshot.profile.value.as_ref().map(|p| p.name.as_str()),
        Some("Jane Roe")
    );
}

#[tokio::test]
async fn dead_backend_batch_is_all_fallback() {
    let client = client_for(&dead_base_url().await);

    let batch = fetch_all(&client, UserId::new(42)).await;
    assert_eq!(batch.fallback_slots().len(), 5);

    let snapshot = OfficeSnapshot::initial().merge(batch);
    assert!(snapshot.has_fallback_data());
    assert_eq!(snapshot.stats.active_cases, 2);
    assert_eq!(snapshot.stats.billable_hours, 142.5);
    assert_eq!(
        snapshot.profile.value.as_ref().map(|p| p.name.as_str()),
        Some("John Doe")
    );
}

#[tokio::test]
async fn later_failure_keeps_live_data() {
    let live = spawn_backend(office_router()).await;
    let broken = spawn_backend(failing_router(StatusCode::BAD_GATEWAY)).await;

    let first = fetch_all(&client_for(&live), UserId::new(42)).await;
    let snapshot = OfficeSnapshot::initial().merge(first);

    let second = fetch_all(&client_for(&broken), UserId::new(42)).await;
    let snapshot = snapshot.merge(second);

    assert_eq!(snapshot.cases.origin, Origin::Live);
    assert_eq!(snapshot.cases.value[0].case_number, "CL-2025-010");
    assert_eq!(snapshot.stats.billable_hours, 12.5);
    assert!(!snapshot.has_fallback_data());
}

#[tokio::test]
async fn active_count_always_matches_displayed_cases() {
    let live = spawn_backend(office_router()).await;
    let dead = dead_base_url().await;

    let mut snapshot = OfficeSnapshot::initial();
    for base in [&dead, &live, &dead] {
        snapshot = snapshot.merge(fetch_all(&client_for(base), UserId::new(1)).await);
        assert_eq!(snapshot.stats.active_cases, count_active(&snapshot.cases.value));
    }
}
