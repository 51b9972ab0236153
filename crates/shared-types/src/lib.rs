pub mod error;
pub mod config;
pub mod fetched;

// Office domain modules
pub mod action;
pub mod agenda;
pub mod case;
pub mod department;
pub mod notification;
pub mod profile;
pub mod staff;
pub mod stats;

pub use config::*;
pub use error::*;
pub use fetched::*;

pub use action::*;
pub use agenda::*;
pub use case::*;
pub use department::*;
pub use notification::*;
pub use profile::*;
pub use staff::*;
pub use stats::*;
