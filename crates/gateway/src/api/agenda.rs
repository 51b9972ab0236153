use crate::client::GatewayClient;
use crate::fallback;
use crate::format::time_of_day;
use crate::user::UserId;
use shared_types::{AgendaFeed, AgendaItem, AgendaResponse, Fetched};

/// Court dates first, then tasks, plus the counts the dashboard shows.
pub fn map_agenda(response: AgendaResponse) -> AgendaFeed {
    let court_rows = response.court_dates.iter().map(|cd| {
        let time = time_of_day(&cd.hearing_date).unwrap_or_else(|| cd.hearing_date.clone());
        AgendaItem::court(time, cd)
    });
    let task_rows = response.tasks.iter().map(AgendaItem::task);

    AgendaFeed {
        items: court_rows.chain(task_rows).collect(),
        court_dates: response.court_dates.len(),
        billable_hours: response.total_hours,
    }
}

/// `GET /agenda/{id}`.
pub async fn fetch_agenda(client: &GatewayClient, user: UserId) -> Fetched<AgendaFeed> {
    let result = client
        .get_json::<AgendaResponse>(&format!("agenda/{}", user))
        .await;
    super::settle("agenda", result, map_agenda, || {
        map_agenda(fallback::agenda_response())
    })
}
