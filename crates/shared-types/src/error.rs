use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// The request never produced a response (DNS, connect, CORS, aborted).
    Network,
    /// The backend answered with a non-2xx status.
    Status,
    /// The response body was not the JSON shape we expected.
    Decode,
    /// An outbound payload could not be serialized.
    Serialize,
    /// The host platform bridge rejected or failed a call.
    Host,
    /// Configuration could not be read or parsed.
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Status => write!(f, "Status"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::Serialize => write!(f, "Serialize"),
            AppErrorKind::Host => write!(f, "Host"),
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured application error used by the gateway, the host bridge and
/// the form bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status code, set only for [`AppErrorKind::Status`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Status,
            message: message.into(),
            status: Some(code),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn serialize(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Serialize, message)
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Host, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Config, message)
    }

    /// Whether retrying the same request later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self.kind {
            AppErrorKind::Network => true,
            AppErrorKind::Status => matches!(self.status, Some(code) if code >= 500 || code == 429),
            _ => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::serialize(err.to_string())
    }
}
