use gateway::api::fetch_profile;
use gateway::UserId;
use pretty_assertions::assert_eq;
use shared_types::Fetched;

use crate::common::{client_for, dead_base_url, office_router, spawn_backend};

#[tokio::test]
async fn live_profile_is_normalized() {
    let base = spawn_backend(office_router()).await;
    let client = client_for(&base);

    let fetched = fetch_profile(&client, UserId::new(42)).await;
    assert!(fetched.is_live());

    let profile = fetched.into_value();
    assert_eq!(profile.name, "Jane Roe");
    assert_eq!(profile.employee_id, "CLF-42");
    assert_eq!(profile.department, "Litigation Department");
    assert_eq!(profile.specialization, "Commercial Litigation");
    assert_eq!(profile.phone, "");
    assert_eq!(profile.bar_number, "N/A");
    assert_eq!(profile.join_date, "N/A");
}

#[tokio::test]
async fn unreachable_backend_yields_fallback_profile() {
    let client = client_for(&dead_base_url().await);

    let fetched = fetch_profile(&client, UserId::new(42)).await;
    let Fetched::Fallback(profile) = fetched else {
        panic!("expected fallback profile");
    };
    assert_eq!(profile, gateway::fallback::profile());
}
