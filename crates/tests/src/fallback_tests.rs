use gateway::api::{fetch_cases, fetch_profile};
use gateway::UserId;

use crate::common::{client_for, client_without_bypass, office_router, spawn_backend};

#[tokio::test]
async fn bypass_header_is_sent() {
    let base = spawn_backend(office_router()).await;

    assert!(fetch_cases(&client_for(&base), UserId::new(1)).await.is_live());
    assert!(fetch_profile(&client_for(&base), UserId::new(1)).await.is_live());
}

#[tokio::test]
async fn rejected_bypass_is_treated_as_failure() {
    let base = spawn_backend(office_router()).await;
    let client = client_without_bypass(&base);

    let cases = fetch_cases(&client, UserId::new(1)).await;
    assert!(!cases.is_live());
    assert_eq!(cases.value(), &gateway::fallback::cases());
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base = spawn_backend(office_router()).await;
    let client = client_for(&format!("{}/", base));

    assert!(fetch_cases(&client, UserId::new(1)).await.is_live());
}
