mod pan;

use crate::{GstError, GstRegistry, GstResult, RegistryRecord};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::oneshot;

pub(crate) const VALID_GSTIN: &str = "29ABCDE1234F1Z5";
pub(crate) const OTHER_VALID_GSTIN: &str = "27AAPFU0939F1ZV";

pub(crate) fn record_for(gstin: &str) -> RegistryRecord {
    RegistryRecord {
        business_name: format!("Business {gstin}"),
        address: "12 MG Road, Bengaluru".to_string(),
        status: "Active".to_string(),
    }
}

/// Registry that answers every lookup the same way and counts calls.
pub(crate) struct FakeRegistry {
    available: bool,
    calls: AtomicUsize,
}

impl FakeRegistry {
    pub(crate) fn available() -> Self {
        Self {
            available: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn unavailable() -> Self {
        Self {
            available: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GstRegistry for FakeRegistry {
    async fn lookup(&self, gstin: &str) -> GstResult<RegistryRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.available {
            Ok(record_for(gstin))
        } else {
            Err(GstError::api_error(
                503,
                "UNAVAILABLE".to_string(),
                "Registry down".to_string(),
            ))
        }
    }
}

/// Registry whose lookups block until the test releases them, so completion
/// order is under the test's control.
pub(crate) struct GatedRegistry {
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl GatedRegistry {
    pub(crate) fn new<const N: usize>(gates: [(&str, oneshot::Receiver<()>); N]) -> Self {
        Self {
            gates: Mutex::new(
                gates
                    .into_iter()
                    .map(|(gstin, gate)| (gstin.to_string(), gate))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl GstRegistry for GatedRegistry {
    async fn lookup(&self, gstin: &str) -> GstResult<RegistryRecord> {
        let gate = self.gates.lock().unwrap().remove(gstin);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(record_for(gstin))
    }
}
