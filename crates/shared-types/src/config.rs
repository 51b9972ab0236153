use serde::{Deserialize, Serialize};

/// Header sent with every backend read so tunnelling proxies skip their
/// browser-warning interstitial page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BypassHeader {
    #[serde(default = "default_bypass_name")]
    pub name: String,
    #[serde(default = "default_bypass_value")]
    pub value: String,
}

impl Default for BypassHeader {
    fn default() -> Self {
        Self {
            name: default_bypass_name(),
            value: default_bypass_value(),
        }
    }
}

/// Runtime configuration for the virtual office front end.
///
/// Every field has a default so that an empty or partial `office.toml`
/// still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfficeConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub bypass_header: BypassHeader,
    /// User id used when the host does not supply one.
    #[serde(default = "default_user_id")]
    pub default_user_id: i64,
    /// Prefix for staff photos stored as host file references.
    #[serde(default = "default_photo_file_base")]
    pub photo_file_base: String,
    /// Delay before the `view=newcase` deep link opens the form.
    #[serde(default = "default_new_case_delay_ms")]
    pub new_case_delay_ms: u64,
    /// Duration of the stat counter animation.
    #[serde(default = "default_stat_animation_ms")]
    pub stat_animation_ms: u64,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            bypass_header: BypassHeader::default(),
            default_user_id: default_user_id(),
            photo_file_base: default_photo_file_base(),
            new_case_delay_ms: default_new_case_delay_ms(),
            stat_animation_ms: default_stat_animation_ms(),
        }
    }
}

impl OfficeConfig {
    /// Join the base URL and a resource path, tolerating stray slashes on
    /// either side.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_bypass_name() -> String {
    "ngrok-skip-browser-warning".to_string()
}

fn default_bypass_value() -> String {
    "true".to_string()
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_user_id() -> i64 {
    12345
}

fn default_photo_file_base() -> String {
    "https://api.telegram.org/file".to_string()
}

fn default_new_case_delay_ms() -> u64 {
    500
}

fn default_stat_animation_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: OfficeConfig = toml::from_str("").unwrap();
        assert_eq!(config, OfficeConfig::default());
        assert_eq!(config.default_user_id, 12345);
        assert_eq!(config.bypass_header.name, "ngrok-skip-browser-warning");
        assert_eq!(config.bypass_header.value, "true");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: OfficeConfig = toml::from_str(
            r#"
            api_base_url = "https://office.example.com/api"

            [bypass_header]
            value = "1"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://office.example.com/api");
        assert_eq!(config.bypass_header.name, "ngrok-skip-browser-warning");
        assert_eq!(config.bypass_header.value, "1");
        assert_eq!(config.new_case_delay_ms, 500);
        assert_eq!(config.stat_animation_ms, 1000);
    }

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let mut config = OfficeConfig::default();
        config.api_base_url = "https://office.example.com/api/".to_string();
        assert_eq!(
            config.endpoint("/cases/7"),
            "https://office.example.com/api/cases/7"
        );
        assert_eq!(config.endpoint("staff"), "https://office.example.com/api/staff");
    }

    #[test]
    fn json_with_missing_fields_defaults() {
        let config: OfficeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, OfficeConfig::default());
    }
}
