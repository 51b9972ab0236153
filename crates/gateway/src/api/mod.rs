//! One module per backend resource. Each exposes a pure `map_*` from the
//! backend response to view records, and a `fetch_*` that never fails.

pub mod agenda;
pub mod cases;
pub mod notifications;
pub mod profile;
pub mod staff;

pub use agenda::fetch_agenda;
pub use cases::fetch_cases;
pub use notifications::fetch_notifications;
pub use profile::fetch_profile;
pub use staff::fetch_staff;

use shared_types::{AppError, Fetched};

/// Turn a backend read into a `Fetched` value: mapped live data on success,
/// the fallback on any failure. Failures are logged and go no further.
pub(crate) fn settle<R, T>(
    resource: &'static str,
    result: Result<R, AppError>,
    map: impl FnOnce(R) -> T,
    fallback: impl FnOnce() -> T,
) -> Fetched<T> {
    match result {
        Ok(body) => {
            tracing::debug!(resource, "Loaded live data");
            Fetched::Live(map(body))
        }
        Err(e) if e.is_transient() => {
            tracing::warn!(resource, error = %e, "Backend unreachable, using fallback data");
            Fetched::Fallback(fallback())
        }
        Err(e) => {
            tracing::error!(resource, error = %e, "Backend read rejected, using fallback data");
            Fetched::Fallback(fallback())
        }
    }
}
