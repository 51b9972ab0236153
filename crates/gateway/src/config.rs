use shared_types::{AppError, OfficeConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<OfficeConfig> = OnceLock::new();

/// `office.toml` at the workspace root, baked in at build time. The mini
/// app runs in a browser and has no filesystem to read it from later.
const EMBEDDED_CONFIG: &str = include_str!("../../../office.toml");

/// Parse a TOML config. Missing keys take their defaults.
pub fn parse_config(contents: &str) -> Result<OfficeConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::config(e.to_string()))
}

/// Load the configuration once. Safe to call repeatedly; only the first
/// call parses.
///
/// `OFFICE_API_BASE_URL`, when set at build time, replaces `api_base_url`.
pub fn load_config() -> &'static OfficeConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse_config(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to parse office.toml, using defaults");
            OfficeConfig::default()
        });
        if let Some(url) = option_env!("OFFICE_API_BASE_URL").filter(|u| !u.is_empty()) {
            config.api_base_url = url.to_string();
        }
        tracing::info!(api_base_url = %config.api_base_url, "Office config loaded");
        config
    })
}
