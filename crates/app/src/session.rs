use dioxus::prelude::*;
use gateway::{FetchBatch, OfficeSnapshot, UserId};

/// View state of the running mini app.
///
/// Holds the current immutable snapshot. Once an action has been handed to
/// the host the app is closing, and late fetch results are dropped.
#[derive(Clone, Copy, PartialEq)]
pub struct OfficeSession {
    pub snapshot: Signal<OfficeSnapshot>,
    pub user: Signal<UserId>,
    pub closed: Signal<bool>,
}

impl OfficeSession {
    pub fn new(default_user: UserId) -> Self {
        Self {
            snapshot: Signal::new(OfficeSnapshot::initial()),
            user: Signal::new(default_user),
            closed: Signal::new(false),
        }
    }

    /// Merge a settled batch into the snapshot.
    pub fn apply(&mut self, batch: FetchBatch) {
        let next = next_snapshot(&self.snapshot.read(), *self.closed.read(), batch);
        match next {
            Some(snapshot) => self.snapshot.set(snapshot),
            None => tracing::debug!("Session closed, dropping fetch results"),
        }
    }

    pub fn mark_closed(&mut self) {
        self.closed.set(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.read()
    }
}

/// The snapshot to show after `batch`, or `None` when the session is closed.
pub fn next_snapshot(
    current: &OfficeSnapshot,
    closed: bool,
    batch: FetchBatch,
) -> Option<OfficeSnapshot> {
    if closed {
        None
    } else {
        Some(current.merge(batch))
    }
}

/// Hook to access the session.
pub fn use_session() -> OfficeSession {
    use_context::<OfficeSession>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Fetched;

    fn cases_batch() -> FetchBatch {
        FetchBatch {
            cases: Some(Fetched::Fallback(gateway::fallback::cases())),
            ..FetchBatch::default()
        }
    }

    #[test]
    fn open_session_merges() {
        let next = next_snapshot(&OfficeSnapshot::initial(), false, cases_batch()).unwrap();
        assert_eq!(next.stats.active_cases, 2);
    }

    #[test]
    fn closed_session_ignores_batches() {
        assert!(next_snapshot(&OfficeSnapshot::initial(), true, cases_batch()).is_none());
    }
}
