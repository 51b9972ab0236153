use serde::{Deserialize, Serialize};

/// Where the value held by a view slot came from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Nothing has been fetched yet; the slot holds its empty default.
    #[default]
    Initial,
    /// The value came from a successful backend response.
    Live,
    /// The backend was unreachable or answered badly; the value is the
    /// built-in fallback catalog.
    Fallback,
}

/// Result of reading one backend resource.
///
/// Reads never fail from the caller's point of view: a failed read still
/// carries a usable value, tagged so that live and fallback data can be
/// told apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback(T),
}

impl<T> Fetched<T> {
    pub fn origin(&self) -> Origin {
        match self {
            Fetched::Live(_) => Origin::Live,
            Fetched::Fallback(_) => Origin::Fallback,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Fetched::Live(v) | Fetched::Fallback(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Live(v) | Fetched::Fallback(v) => v,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(v) => Fetched::Live(f(v)),
            Fetched::Fallback(v) => Fetched::Fallback(f(v)),
        }
    }
}
