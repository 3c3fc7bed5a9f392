//! GSTIN and PAN validation.
//!
//! Format checks are synchronous and pure. GSTIN verification additionally
//! asks a [`GstRegistry`] about the number; registry failures never reach the
//! caller as errors, they come back as an invalid [`GstinValidation`].

pub mod error;
pub mod gstin;
pub mod pan;
pub mod registry;
pub mod validation_state;
pub mod validator;

pub use error::{GstError, GstResult, IdentifierError, IdentifierResult};
pub use gstin::{GSTIN_LENGTH, GstinValidation, check_gstin_format};
pub use pan::{PAN_LENGTH, PanValidation, check_pan_format, validate_pan};
pub use registry::{GstRegistry, HttpGstRegistry, RegistryRecord};
pub use validation_state::ValidationState;
pub use validator::{GstinValidator, SERVICE_UNAVAILABLE};

#[cfg(test)]
mod tests;
