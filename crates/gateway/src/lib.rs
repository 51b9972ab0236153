//! Remote data gateway and view state for the virtual office.
//!
//! Reads the office REST backend, normalizes each response into view
//! records, substitutes built-in data when a read fails, and folds the
//! results into an immutable [`OfficeSnapshot`].

pub mod api;
pub mod batch;
pub mod client;
pub mod config;
pub mod fallback;
pub mod format;
pub mod snapshot;
pub mod user;

pub use batch::{fetch_all, FetchBatch};
pub use client::GatewayClient;
pub use config::load_config;
pub use snapshot::{OfficeSnapshot, Slot};
pub use user::UserId;
