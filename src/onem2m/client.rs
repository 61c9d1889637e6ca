use crate::config;
use crate::error::{GatewayError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

/// Header carrying the request originator (`<username>:<password>`).
pub const ORIGIN_HEADER: &str = "X-M2M-Origin";

pub struct Client {
    http_client: HttpClient,
    config: config::OneM2mConfig,
}

impl Client {
    pub fn new(config: config::OneM2mConfig) -> Self {
        let http_client = HttpClient::new();
        Self {
            http_client,
            config,
        }
    }

    /// Path of the container holding the appliances.
    pub fn base_path(&self) -> &str {
        &self.config.path
    }

    pub async fn get(&self, path: &str) -> Result<String, GatewayError> {
        let url = format!("{}{}", self.config.url, path);
        let response = self
            .http_client
            .get(&url)
            .header(ORIGIN_HEADER, self.config.originator())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(GatewayError::server_error(status, body))
        }
    }

    /// Fetches `path` and decodes it as `T`.
    ///
    /// `resource` names the expected shape in decode errors.
    pub async fn get_resource<T>(&self, path: &str, resource: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        let body = self.get(path).await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::decode(resource, e))
    }
}
