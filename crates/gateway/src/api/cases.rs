use crate::client::GatewayClient;
use crate::fallback;
use crate::user::UserId;
use shared_types::{CaseListResponse, CaseRecord, Fetched};

pub fn map_cases(response: CaseListResponse) -> Vec<CaseRecord> {
    response.cases.into_iter().map(CaseRecord::from).collect()
}

/// `GET /cases/{id}`.
pub async fn fetch_cases(client: &GatewayClient, user: UserId) -> Fetched<Vec<CaseRecord>> {
    let result = client
        .get_json::<CaseListResponse>(&format!("cases/{}", user))
        .await;
    super::settle("cases", result, map_cases, fallback::cases)
}
