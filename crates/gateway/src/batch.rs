use crate::api;
use crate::client::GatewayClient;
use crate::user::UserId;
use shared_types::{AgendaFeed, CaseRecord, Fetched, Notification, Profile, StaffMember};

/// Outcome of one round of backend reads. `None` marks a slot that was not
/// part of this round and keeps whatever the snapshot already holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchBatch {
    pub profile: Option<Fetched<Profile>>,
    pub cases: Option<Fetched<Vec<CaseRecord>>>,
    pub agenda: Option<Fetched<AgendaFeed>>,
    pub notifications: Option<Fetched<Vec<Notification>>>,
    pub staff: Option<Fetched<Vec<StaffMember>>>,
}

impl FetchBatch {
    pub fn agenda_only(agenda: Fetched<AgendaFeed>) -> Self {
        Self {
            agenda: Some(agenda),
            ..Self::default()
        }
    }

    pub fn staff_only(staff: Fetched<Vec<StaffMember>>) -> Self {
        Self {
            staff: Some(staff),
            ..Self::default()
        }
    }

    /// Names of the slots in this batch that were served from fallback data.
    pub fn fallback_slots(&self) -> Vec<&'static str> {
        let slots = [
            ("profile", self.profile.as_ref().map(|f| f.is_live())),
            ("cases", self.cases.as_ref().map(|f| f.is_live())),
            ("agenda", self.agenda.as_ref().map(|f| f.is_live())),
            ("notifications", self.notifications.as_ref().map(|f| f.is_live())),
            ("staff", self.staff.as_ref().map(|f| f.is_live())),
        ];
        slots
            .into_iter()
            .filter(|(_, live)| *live == Some(false))
            .map(|(name, _)| name)
            .collect()
    }
}

/// Read every resource concurrently. Resolves once all five reads have
/// settled, each to live or fallback data.
pub async fn fetch_all(client: &GatewayClient, user: UserId) -> FetchBatch {
    let (profile, cases, agenda, notifications, staff) = futures::join!(
        api::fetch_profile(client, user),
        api::fetch_cases(client, user),
        api::fetch_agenda(client, user),
        api::fetch_notifications(client),
        api::fetch_staff(client),
    );

    let batch = FetchBatch {
        profile: Some(profile),
        cases: Some(cases),
        agenda: Some(agenda),
        notifications: Some(notifications),
        staff: Some(staff),
    };
    tracing::info!(
        user = %user,
        fallback = ?batch.fallback_slots(),
        "Fetch batch settled"
    );
    batch
}
