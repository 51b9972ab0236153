use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Colour scheme reported by the host (`themeParams`).
///
/// Every field is optional; hosts only send what the user's client defines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeParams {
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub hint_color: Option<String>,
    #[serde(default)]
    pub link_color: Option<String>,
    #[serde(default)]
    pub button_color: Option<String>,
    #[serde(default)]
    pub button_text_color: Option<String>,
    #[serde(default)]
    pub secondary_bg_color: Option<String>,
}

impl ThemeParams {
    /// `(css variable, value)` pairs for every colour the host supplied.
    pub fn css_vars(&self) -> Vec<(&'static str, &str)> {
        [
            ("--tg-theme-bg-color", &self.bg_color),
            ("--tg-theme-text-color", &self.text_color),
            ("--tg-theme-hint-color", &self.hint_color),
            ("--tg-theme-link-color", &self.link_color),
            ("--tg-theme-button-color", &self.button_color),
            ("--tg-theme-button-text-color", &self.button_text_color),
            ("--tg-theme-secondary-bg-color", &self.secondary_bg_color),
        ]
        .into_iter()
        .filter_map(|(var, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (var, v))
        })
        .collect()
    }

    /// Script that sets [`Self::css_vars`] on the document root.
    ///
    /// Values are embedded as JSON string literals so host-supplied text
    /// cannot break out of the script.
    pub fn apply_script(&self) -> String {
        let mut script = String::from("(function() { var s = document.documentElement.style;");
        for (var, value) in self.css_vars() {
            let literal = serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());
            script.push_str(&format!(" s.setProperty('{var}', {literal});"));
        }
        script.push_str(" })();");
        script
    }
}

/// Apply host colours to the page.
pub fn apply_theme(params: &ThemeParams) {
    document::eval(&params.apply_script());
}
