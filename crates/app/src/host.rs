//! The Telegram WebApp host.
//!
//! Everything the page asks of the host goes through [`HostBridge`], so the
//! controller and the form bridge can be driven by a recording host in
//! tests. When the page is opened outside Telegram the production bridge
//! degrades to console logging and `window.alert`.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_types::AppError;
use shared_ui::ThemeParams;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
}

impl ImpactStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFeedback {
    Success,
}

impl NotificationFeedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFeedback::Success => "success",
        }
    }
}

/// One fire-and-forget request to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Expand,
    Ready,
    HapticImpact(ImpactStyle),
    HapticNotification(NotificationFeedback),
    ShowAlert(String),
    SendData(String),
    Close,
}

/// JSON string literal, safe to splice into a script.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

impl HostCall {
    /// Script performing this call against `window.Telegram.WebApp`, with a
    /// browser fallback when the host object is missing.
    pub fn script(&self) -> String {
        let body = match self {
            HostCall::Expand => "if (tg) tg.expand();".to_string(),
            HostCall::Ready => "if (tg) tg.ready();".to_string(),
            HostCall::HapticImpact(style) => format!(
                "if (tg && tg.HapticFeedback) tg.HapticFeedback.impactOccurred('{}');",
                style.as_str()
            ),
            HostCall::HapticNotification(kind) => format!(
                "if (tg && tg.HapticFeedback) tg.HapticFeedback.notificationOccurred('{}');",
                kind.as_str()
            ),
            HostCall::ShowAlert(message) => format!(
                "var m = {}; if (tg && tg.showAlert) tg.showAlert(m); else window.alert(m);",
                js_string(message)
            ),
            HostCall::SendData(payload) => format!(
                "var d = {}; if (tg) tg.sendData(d); else console.log('sendData', d);",
                js_string(payload)
            ),
            HostCall::Close => "if (tg) tg.close(); else console.log('App closed');".to_string(),
        };
        format!(
            "(function() {{ var tg = window.Telegram && window.Telegram.WebApp; {} }})();",
            body
        )
    }
}

/// Host platform operations. Implementors only provide [`Self::dispatch`].
pub trait HostBridge {
    fn dispatch(&self, call: HostCall);

    fn expand(&self) {
        self.dispatch(HostCall::Expand);
    }

    fn ready(&self) {
        self.dispatch(HostCall::Ready);
    }

    fn haptic_impact(&self, style: ImpactStyle) {
        self.dispatch(HostCall::HapticImpact(style));
    }

    fn haptic_notification(&self, kind: NotificationFeedback) {
        self.dispatch(HostCall::HapticNotification(kind));
    }

    fn show_alert(&self, message: &str) {
        self.dispatch(HostCall::ShowAlert(message.to_string()));
    }

    fn send_data(&self, payload: &str) {
        self.dispatch(HostCall::SendData(payload.to_string()));
    }

    fn close(&self) {
        self.dispatch(HostCall::Close);
    }
}

/// Production bridge: evaluates each call in the page.
pub struct TelegramHost;

impl HostBridge for TelegramHost {
    fn dispatch(&self, call: HostCall) {
        tracing::trace!(?call, "Host call");
        document::eval(&call.script());
    }
}

/// Shared, injectable handle to the host. Provided as context by the root
/// component.
#[derive(Clone)]
pub struct HostHandle(Rc<dyn HostBridge>);

impl HostHandle {
    pub fn new(host: impl HostBridge + 'static) -> Self {
        Self(Rc::new(host))
    }

    pub fn telegram() -> Self {
        Self::new(TelegramHost)
    }
}

impl std::ops::Deref for HostHandle {
    type Target = dyn HostBridge;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for HostHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostHandle")
    }
}

/// Hook to access the host.
pub fn use_host() -> HostHandle {
    use_context::<HostHandle>()
}

// ── Host reads ──────────────────────────────────────────────────────

/// Host error for a failed read of `what`.
fn host_read_error(what: &str, cause: impl fmt::Debug) -> AppError {
    AppError::host(format!("could not read {what}: {cause:?}"))
}

/// Evaluate `script` in the page and decode what it returns.
async fn read_host<T: DeserializeOwned>(what: &str, script: &str) -> Result<T, AppError> {
    document::eval(script)
        .join::<T>()
        .await
        .map_err(|e| host_read_error(what, e))
}

/// Raw `initDataUnsafe.user.id`, or `null` when the host has none.
pub async fn read_user_id() -> serde_json::Value {
    let script = r#"
        var tg = window.Telegram && window.Telegram.WebApp;
        var user = tg && tg.initDataUnsafe && tg.initDataUnsafe.user;
        return user && user.id != null ? user.id : null;
        "#;
    read_host("user id", script).await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Host user id unavailable");
        serde_json::Value::Null
    })
}

/// Current `themeParams`, empty when unavailable.
pub async fn read_theme_params() -> ThemeParams {
    let script = r#"
        var tg = window.Telegram && window.Telegram.WebApp;
        return (tg && tg.themeParams) || {};
        "#;
    read_host("theme", script).await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Host theme unavailable");
        ThemeParams::default()
    })
}

/// Something the host or page reported asynchronously.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    ThemeChanged,
    BackButton,
    /// An uncaught script error, forwarded from `window.onerror`.
    Error {
        #[serde(default)]
        message: String,
        #[serde(default)]
        line: u32,
        #[serde(default)]
        url: String,
    },
}

const EVENT_LISTENER_JS: &str = r#"
    var tg = window.Telegram && window.Telegram.WebApp;
    if (tg) {
        tg.onEvent('themeChanged', function() { dioxus.send({ kind: 'theme_changed' }); });
        if (tg.BackButton) {
            tg.BackButton.onClick(function() { dioxus.send({ kind: 'back_button' }); });
            tg.BackButton.show();
        }
    }
    window.onerror = function(msg, url, line) {
        dioxus.send({ kind: 'error', message: String(msg), line: line || 0, url: url || '' });
        return false;
    };
"#;

/// Subscribe to host events and feed each one to `on_event` until the
/// channel closes.
pub async fn listen_host_events(mut on_event: impl FnMut(HostEvent)) {
    let mut eval = document::eval(EVENT_LISTENER_JS);
    loop {
        match eval.recv::<HostEvent>().await {
            Ok(event) => on_event(event),
            Err(e) => {
                tracing::debug!(error = ?e, "Host event channel closed");
                break;
            }
        }
    }
}

// ── Test support ────────────────────────────────────────────────────

/// Host that records every call instead of performing it.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingHost {
    calls: std::cell::RefCell<Vec<HostCall>>,
}

#[cfg(test)]
impl RecordingHost {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }
}

#[cfg(test)]
impl HostBridge for RecordingHost {
    fn dispatch(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}
