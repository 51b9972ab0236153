use gateway::api::fetch_agenda;
use gateway::UserId;
use pretty_assertions::assert_eq;
use shared_types::AgendaKind;

use crate::common::{client_for, dead_base_url, office_router, spawn_backend};

#[tokio::test]
async fn live_agenda_lists_court_dates_before_tasks() {
    let base = spawn_backend(office_router()).await;
    let client = client_for(&base);

    let fetched = fetch_agenda(&client, UserId::new(7)).await;
    assert!(fetched.is_live());

    let feed = fetched.into_value();
    let rows: Vec<_> = feed
        .items
        .iter()
        .map(|i| (i.time.as_str(), i.description.as_str(), i.kind))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("10:00 AM", "District Court - Motion hearing", AgendaKind::Court),
            ("next week", "Appeals Court - Hearing", AgendaKind::Court),
            ("Anytime", "File reply brief", AgendaKind::Deadline),
        ]
    );
    assert_eq!(feed.court_dates, 2);
    assert_eq!(feed.billable_hours, 12.5);
}

#[tokio::test]
async fn unreachable_backend_yields_fallback_agenda() {
    let client = client_for(&dead_base_url().await);

    let fetched = fetch_agenda(&client, UserId::new(7)).await;
    assert!(!fetched.is_live());

    let feed = fetched.into_value();
    assert_eq!(feed.court_dates, 2);
    assert_eq!(feed.billable_hours, 142.5);
    assert_eq!(feed.items.len(), 4);
}
