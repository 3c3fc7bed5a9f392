use crate::GstinValidation;

/// The validating flag and the last stored GSTIN result for one consumer.
///
/// Owned and moved through each step rather than shared, so overlapping
/// lookups can be replayed in any completion order. Whichever lookup
/// completes last overwrites the stored result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub validating: bool,
    pub result: Option<GstinValidation>,
}

impl ValidationState {
    /// A lookup has started. Any stored result stays visible meanwhile.
    pub fn begin(self) -> Self {
        Self {
            validating: true,
            ..self
        }
    }

    /// A lookup has finished. Earlier lookups are not cancelled; if one of
    /// them completes afterwards it overwrites this result.
    pub fn complete(self, outcome: GstinValidation) -> Self {
        Self {
            validating: false,
            result: Some(outcome),
        }
    }

    /// Store a result that needed no lookup. A lookup already in flight
    /// keeps the validating flag set.
    pub fn store(self, outcome: GstinValidation) -> Self {
        Self {
            result: Some(outcome),
            ..self
        }
    }

    /// Drop the stored result. Does not touch the validating flag.
    pub fn clear(self) -> Self {
        Self {
            result: None,
            ..self
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.is_valid)
    }
}
