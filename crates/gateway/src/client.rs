use serde::de::DeserializeOwned;
use shared_types::{AppError, OfficeConfig};

/// Thin HTTP client for the office REST backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    config: OfficeConfig,
}

impl GatewayClient {
    pub fn new(config: OfficeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    /// `GET {base}/{path}` and decode the JSON body.
    ///
    /// Every request carries the configured bypass header.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.config.endpoint(path);
        let header = &self.config.bypass_header;

        let response = self
            .http
            .get(&url)
            .header(header.name.as_str(), header.value.as_str())
            .send()
            .await
            .map_err(|e| AppError::network(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(
                status.as_u16(),
                format!("GET {} returned {}", url, status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Reading body of {} failed: {}", url, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("Unexpected body from {}: {}", url, e)))
    }
}
