use crate::{IdentifierError, IdentifierResult};

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const PAN_LENGTH: usize = 10;

static PAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern compiles"));

/// Outcome of a PAN check, shaped for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check a PAN against the `AAAAA9999A` layout.
#[track_caller]
pub fn check_pan_format(pan: &str) -> IdentifierResult<()> {
    if pan.chars().count() != PAN_LENGTH {
        return Err(IdentifierError::invalid_length("PAN must be 10 characters"));
    }

    if !PAN_PATTERN.is_match(pan) {
        return Err(IdentifierError::invalid_format("Invalid PAN format"));
    }

    Ok(())
}

/// Validate a PAN. Format only: there is no checksum and no remote lookup.
pub fn validate_pan(pan: &str) -> PanValidation {
    match check_pan_format(pan) {
        Ok(()) => PanValidation {
            is_valid: true,
            error: None,
        },
        Err(e) => PanValidation {
            is_valid: false,
            error: Some(e.message().to_string()),
        },
    }
}
