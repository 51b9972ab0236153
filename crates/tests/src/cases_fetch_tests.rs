use axum::http::StatusCode;
use gateway::api::fetch_cases;
use gateway::UserId;
use pretty_assertions::assert_eq;
use shared_types::count_active;

use crate::common::{client_for, failing_router, garbage_router, office_router, spawn_backend};

#[tokio::test]
async fn live_cases_keep_backend_order() {
    let base = spawn_backend(office_router()).await;
    let client = client_for(&base);

    let fetched = fetch_cases(&client, UserId::new(7)).await;
    assert!(fetched.is_live());

    let cases = fetched.into_value();
    let numbers: Vec<_> = cases.iter().map(|c| c.case_number.as_str()).collect();
    assert_eq!(numbers, vec!["CL-2025-010", "CL-2025-011", "CL-2025-012"]);
    assert_eq!(cases[0].client, "Acme Ltd");
    assert_eq!(cases[0].next_court_date.as_deref(), Some("2025-12-15T09:00:00"));
    assert_eq!(cases[0].deadline, None);
    assert_eq!(cases[1].client, "");
    assert_eq!(count_active(&cases), 2);
}

#[tokio::test]
async fn server_error_falls_back_to_catalog() {
    let base = spawn_backend(failing_router(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let client = client_for(&base);

    let fetched = fetch_cases(&client, UserId::new(7)).await;
    assert!(!fetched.is_live());
    assert_eq!(fetched.value(), &gateway::fallback::cases());
}

#[tokio::test]
async fn not_found_falls_back_to_catalog() {
    let base = spawn_backend(failing_router(StatusCode::NOT_FOUND)).await;
    let client = client_for(&base);

    let fetched = fetch_cases(&client, UserId::new(7)).await;
    assert!(!fetched.is_live());
    assert_eq!(fetched.value().len(), 4);
}

#[tokio::test]
async fn malformed_body_falls_back_to_catalog() {
    let base = spawn_backend(garbage_router()).await;
    let client = client_for(&base);

    let fetched = fetch_cases(&client, UserId::new(7)).await;
    assert!(!fetched.is_live());
    assert_eq!(count_active(fetched.value()), 2);
}
