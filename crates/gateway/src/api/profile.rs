use crate::client::GatewayClient;
use crate::fallback;
use crate::user::UserId;
use shared_types::{Fetched, Profile, UserResponse};

/// `GET /user/{id}`.
pub async fn fetch_profile(client: &GatewayClient, user: UserId) -> Fetched<Profile> {
    let result = client
        .get_json::<UserResponse>(&format!("user/{}", user))
        .await;
    super::settle("profile", result, Profile::from, fallback::profile)
}
