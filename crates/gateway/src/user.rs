use serde_json::Value;
use std::fmt;

/// Identifier of the employee whose data is fetched.
///
/// Resolution never fails: anything other than a positive integer from the
/// host degrades to the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Pick the host-supplied id when it is usable, else `default`.
    pub fn resolve(host_user: Option<i64>, default: i64) -> Self {
        match host_user.filter(|id| *id > 0) {
            Some(id) => Self(id),
            None => {
                tracing::debug!(default, "No usable host user id, using default");
                Self(default)
            }
        }
    }

    /// Resolve from the raw JSON value the host reports. Numbers and
    /// numeric strings are accepted.
    pub fn from_host_value(value: &Value, default: i64) -> Self {
        let id = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        Self::resolve(id, default)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
