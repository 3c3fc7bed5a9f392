mod http_registry;

pub use http_registry::HttpGstRegistry;

use crate::GstResult;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Registration details the GST registry holds for a GSTIN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryRecord {
    pub business_name: String,
    pub address: String,
    pub status: String,
}

/// Remote lookup of a format-valid GSTIN.
#[async_trait]
pub trait GstRegistry: Send + Sync {
    async fn lookup(&self, gstin: &str) -> GstResult<RegistryRecord>;
}
