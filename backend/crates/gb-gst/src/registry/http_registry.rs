use crate::{GstError, GstRegistry, GstResult, RegistryRecord};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

/// GST registry reached over HTTP.
///
/// Looks up `GET {base_url}/api/v1/gstin/{gstin}` and expects
/// `{"businessName", "address", "status"}` back.
pub struct HttpGstRegistry {
    pub base_url: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl HttpGstRegistry {
    /// # Arguments
    /// * `base_url` - Registry URL (e.g., "https://gst.example.in")
    /// * `api_key` - Optional key sent as the X-Api-Key header
    /// * `timeout` - Whole-request timeout; expiry counts as a registry failure
    #[track_caller]
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> GstResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            client,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref api_key) = self.api_key {
            req = req.header("X-Api-Key", api_key);
        }

        req
    }
}

#[async_trait]
impl GstRegistry for HttpGstRegistry {
    async fn lookup(&self, gstin: &str) -> GstResult<RegistryRecord> {
        let req = self.request(Method::GET, &format!("/api/v1/gstin/{}", gstin));
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // Error bodies are best-effort; a registry may not send JSON at all.
            let error = serde_json::from_slice::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").cloned());
            let code = error
                .as_ref()
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .as_ref()
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(GstError::api_error(status.as_u16(), code, message));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
