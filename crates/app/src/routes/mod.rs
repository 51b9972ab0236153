pub mod not_found;
pub mod office;

use dioxus::prelude::*;
use not_found::NotFound;
use office::Office;

/// Application routes. The whole office is one page; the launch query
/// (`view`, `broadcast`, `time`) is handed to it unparsed.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/?:..query")]
    Office { query: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
