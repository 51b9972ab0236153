use crate::host::{HostBridge, HostHandle};

/// Alert text for an uncaught script error.
pub fn format_script_error(message: &str, line: u32, url: &str) -> String {
    format!("Error: {message} \nLine: {line} \nURL: {url} ")
}

/// Surfaces uncaught page errors to the user through the host's alert.
///
/// Registered once by the root component with the same host handle the rest
/// of the app uses.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter {
    host: HostHandle,
}

impl ErrorReporter {
    pub fn new(host: HostHandle) -> Self {
        Self { host }
    }

    pub fn report_script_error(&self, message: &str, line: u32, url: &str) {
        tracing::error!(message, line, url, "Uncaught script error");
        report_to(&*self.host, message, line, url);
    }
}

fn report_to(host: &dyn HostBridge, message: &str, line: u32, url: &str) {
    host.show_alert(&format_script_error(message, line, url));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, RecordingHost};

    #[test]
    fn format_matches_alert_layout() {
        assert_eq!(
            format_script_error("x is undefined", 42, "https://app/main.js"),
            "Error: x is undefined \nLine: 42 \nURL: https://app/main.js "
        );
    }

    #[test]
    fn report_shows_one_alert() {
        let host = RecordingHost::default();
        report_to(&host, "boom", 7, "app.js");
        assert_eq!(
            host.calls(),
            vec![HostCall::ShowAlert("Error: boom \nLine: 7 \nURL: app.js ".into())]
        );
    }
}
