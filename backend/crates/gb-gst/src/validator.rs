use crate::{GstRegistry, GstinValidation, ValidationState, check_gstin_format};

use log::{debug, warn};

/// Reported for any registry failure: transport, HTTP status or bad payload.
pub const SERVICE_UNAVAILABLE: &str = "Validation service unavailable";

/// Verifies GSTINs: format first, then the registry.
pub struct GstinValidator<R> {
    registry: R,
}

impl<R: GstRegistry> GstinValidator<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Verify a GSTIN. Badly formed input is rejected without a registry call.
    pub async fn validate_gstin(&self, gstin: &str) -> GstinValidation {
        if let Err(e) = check_gstin_format(gstin) {
            debug!("GSTIN {gstin:?} rejected locally: {}", e.message());
            return e.into();
        }

        self.lookup(gstin).await
    }

    /// Run a verification and fold its outcome into `state`.
    ///
    /// Format failures are stored straight away and never enter the
    /// validating state; an earlier lookup still in flight stays flagged.
    pub async fn validate(&self, state: ValidationState, gstin: &str) -> ValidationState {
        if let Err(e) = check_gstin_format(gstin) {
            return state.store(e.into());
        }

        let state = state.begin();
        let outcome = self.lookup(gstin).await;
        state.complete(outcome)
    }

    async fn lookup(&self, gstin: &str) -> GstinValidation {
        debug!("Looking up GSTIN {gstin} in registry");

        match self.registry.lookup(gstin).await {
            Ok(record) => {
                debug!("GSTIN {gstin} registered to {}", record.business_name);
                GstinValidation::verified(record)
            }
            Err(e) => {
                warn!("GSTIN lookup failed for {gstin}: {e}");
                GstinValidation::invalid(SERVICE_UNAVAILABLE)
            }
        }
    }
}
