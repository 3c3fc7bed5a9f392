use crate::{IdentifierError, IdentifierResult, RegistryRecord};

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const GSTIN_LENGTH: usize = 15;

// State code, PAN, entity number, literal Z, check character.
static GSTIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("GSTIN pattern compiles")
});

/// Check a GSTIN's length and layout without contacting the registry.
#[track_caller]
pub fn check_gstin_format(gstin: &str) -> IdentifierResult<()> {
    if gstin.chars().count() != GSTIN_LENGTH {
        return Err(IdentifierError::invalid_length("GSTIN must be 15 characters"));
    }

    if !GSTIN_PATTERN.is_match(gstin) {
        return Err(IdentifierError::invalid_format("Invalid GSTIN format"));
    }

    Ok(())
}

/// Outcome of a GSTIN verification.
///
/// Either `is_valid` with the registry's details filled in, or not valid with
/// an `error` explaining why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstinValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl GstinValidation {
    pub fn verified(record: RegistryRecord) -> Self {
        Self {
            is_valid: true,
            error: None,
            business_name: Some(record.business_name),
            address: Some(record.address),
            status: Some(record.status),
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            business_name: None,
            address: None,
            status: None,
        }
    }
}

impl From<IdentifierError> for GstinValidation {
    fn from(err: IdentifierError) -> Self {
        Self::invalid(err.message())
    }
}
