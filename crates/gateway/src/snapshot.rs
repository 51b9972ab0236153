//! Immutable view state.
//!
//! A snapshot is never mutated in place. `merge` builds the next snapshot
//! from the current one and a settled [`FetchBatch`], and the derived stats
//! are recomputed from the merged data every time, so the "Active Cases"
//! figure always equals the number of active cases being displayed.

use crate::batch::FetchBatch;
use serde::{Deserialize, Serialize};
use shared_types::{
    count_active, AgendaFeed, CaseRecord, Fetched, Notification, OfficeStats, Origin, Profile,
    StaffMember,
};

/// A value plus where it came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Slot<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T: Clone> Slot<T> {
    fn absorb(&self, incoming: Option<Fetched<T>>) -> Slot<T> {
        match incoming {
            None => self.clone(),
            Some(Fetched::Live(value)) => Slot {
                value,
                origin: Origin::Live,
            },
            // Fallback data never overwrites data that came from the backend.
            Some(Fetched::Fallback(_)) if self.origin == Origin::Live => self.clone(),
            Some(Fetched::Fallback(value)) => Slot {
                value,
                origin: Origin::Fallback,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OfficeSnapshot {
    pub profile: Slot<Option<Profile>>,
    pub cases: Slot<Vec<CaseRecord>>,
    pub agenda: Slot<AgendaFeed>,
    pub notifications: Slot<Vec<Notification>>,
    pub staff: Slot<Vec<StaffMember>>,
    pub stats: OfficeStats,
}

impl OfficeSnapshot {
    /// Empty state rendered before the first batch settles.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Fold a settled batch into a new snapshot.
    pub fn merge(&self, batch: FetchBatch) -> Self {
        let profile = self.profile.absorb(batch.profile.map(|f| f.map(Some)));
        let cases = self.cases.absorb(batch.cases);
        let agenda = self.agenda.absorb(batch.agenda);
        let notifications = self.notifications.absorb(batch.notifications);
        let staff = self.staff.absorb(batch.staff);

        let stats = OfficeStats {
            active_cases: count_active(&cases.value),
            court_dates: agenda.value.court_dates,
            billable_hours: agenda.value.billable_hours,
        };

        Self {
            profile,
            cases,
            agenda,
            notifications,
            staff,
            stats,
        }
    }

    /// Whether any slot is showing fallback data.
    pub fn has_fallback_data(&self) -> bool {
        [
            self.profile.origin,
            self.cases.origin,
            self.agenda.origin,
            self.notifications.origin,
            self.staff.origin,
        ]
        .contains(&Origin::Fallback)
    }

    /// Whether at least one batch has been merged.
    pub fn is_loaded(&self) -> bool {
        self.cases.origin != Origin::Initial || self.agenda.origin != Origin::Initial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::agenda::map_agenda;
    use crate::fallback;
    use pretty_assertions::assert_eq;

    fn live_case(id: i64, status: &str) -> CaseRecord {
        CaseRecord {
            id,
            case_number: format!("LIVE-{id}"),
            title: "Live case".into(),
            client: "Client".into(),
            case_type: "Civil".into(),
            status: status.into(),
            priority: "normal".into(),
            next_court_date: None,
            deadline: None,
        }
    }

    fn fallback_batch() -> FetchBatch {
        FetchBatch {
            profile: Some(Fetched::Fallback(fallback::profile())),
            cases: Some(Fetched::Fallback(fallback::cases())),
            agenda: Some(Fetched::Fallback(map_agenda(fallback::agenda_response()))),
            notifications: Some(Fetched::Fallback(fallback::notifications())),
            staff: Some(Fetched::Fallback(fallback::staff())),
        }
    }

    #[test]
    fn initial_snapshot_is_empty() {
        let snapshot = OfficeSnapshot::initial();
        assert!(snapshot.profile.value.is_none());
        assert!(snapshot.cases.value.is_empty());
        assert_eq!(snapshot.stats, OfficeStats::default());
        assert!(!snapshot.is_loaded());
        assert!(!snapshot.has_fallback_data());
    }

    #[test]
    fn fallback_batch_populates_everything() {
        let snapshot = OfficeSnapshot::initial().merge(fallback_batch());
        assert_eq!(
            snapshot.stats,
            OfficeStats {
                active_cases: 2,
                court_dates: 2,
                billable_hours: 142.5,
            }
        );
        assert_eq!(snapshot.cases.origin, Origin::Fallback);
        assert!(snapshot.has_fallback_data());
        assert!(snapshot.is_loaded());
        assert_eq!(
            snapshot.profile.value.as_ref().map(|p| p.name.as_str()),
            Some("John Doe")
        );
    }

    #[test]
    fn merge_does_not_touch_the_original() {
        let initial = OfficeSnapshot::initial();
        let _next = initial.merge(fallback_batch());
        assert_eq!(initial, OfficeSnapshot::initial());
    }

    #[test]
    fn live_data_replaces_fallback() {
        let first = OfficeSnapshot::initial().merge(fallback_batch());
        let second = first.merge(FetchBatch {
            cases: Some(Fetched::Live(vec![live_case(10, "active")])),
            ..FetchBatch::default()
        });
        assert_eq!(second.cases.origin, Origin::Live);
        assert_eq!(second.cases.value.len(), 1);
        assert_eq!(second.stats.active_cases, 1);
        // Untouched slots carry over.
        assert_eq!(second.agenda, first.agenda);
    }

    #[test]
    fn fallback_never_clobbers_live_data() {
        let live = OfficeSnapshot::initial().merge(FetchBatch {
            cases: Some(Fetched::Live(vec![
                live_case(1, "active"),
                live_case(2, "active"),
                live_case(3, "active"),
            ])),
            ..FetchBatch::default()
        });
        let after_outage = live.merge(fallback_batch());

        assert_eq!(after_outage.cases, live.cases);
        assert_eq!(after_outage.stats.active_cases, 3);
        // Slots that were never live do take the fallback.
        assert_eq!(after_outage.agenda.origin, Origin::Fallback);
    }

    #[test]
    fn active_count_tracks_displayed_cases() {
        let cases = vec![
            live_case(1, "active"),
            live_case(2, "closed"),
            live_case(3, "Active"),
            live_case(4, "active"),
        ];
        let snapshot = OfficeSnapshot::initial().merge(FetchBatch {
            cases: Some(Fetched::Live(cases)),
            ..FetchBatch::default()
        });
        assert_eq!(snapshot.stats.active_cases, count_active(&snapshot.cases.value));
        assert_eq!(snapshot.stats.active_cases, 2);
    }

    #[test]
    fn agenda_refresh_updates_stats() {
        let first = OfficeSnapshot::initial().merge(fallback_batch());
        let refreshed = first.merge(FetchBatch::agenda_only(Fetched::Live(AgendaFeed {
            items: Vec::new(),
            court_dates: 5,
            billable_hours: 12.25,
        })));
        assert_eq!(refreshed.stats.court_dates, 5);
        assert_eq!(refreshed.stats.billable_hours, 12.25);
        assert_eq!(refreshed.stats.active_cases, 2);
    }
}
