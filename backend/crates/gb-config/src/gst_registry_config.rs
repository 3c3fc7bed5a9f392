use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REGISTRY_TIMEOUT_SECS, DEFAULT_REGISTRY_URL,
    MAX_REGISTRY_TIMEOUT_SECS, MIN_REGISTRY_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where GSTINs are verified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GstRegistryConfig {
    pub base_url: String,
    /// Sent as X-Api-Key. Never logged.
    pub api_key: Option<String>,
    /// Whole-request timeout for a lookup
    pub timeout_secs: u64,
}

impl Default for GstRegistryConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_REGISTRY_URL),
            api_key: None,
            timeout_secs: DEFAULT_REGISTRY_TIMEOUT_SECS,
        }
    }
}

impl GstRegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::registry(format!(
                "gst_registry.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_REGISTRY_TIMEOUT_SECS
            || self.timeout_secs > MAX_REGISTRY_TIMEOUT_SECS
        {
            return Err(ConfigError::registry(format!(
                "gst_registry.timeout_secs must be {}-{}, got {}",
                MIN_REGISTRY_TIMEOUT_SECS, MAX_REGISTRY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.api_key.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::registry(
                "gst_registry.api_key cannot be empty when set",
            ));
        }

        Ok(())
    }
}
