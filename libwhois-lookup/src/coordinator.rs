use crate::{
    api::{LookupRecord, WhoisApi},
    error::LookupError,
    types::{LookupConfig, LookupMode, LookupState},
};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Shared {
    state: LookupState,
    /// Id of the most recently issued lookup.
    latest: u64,
    /// Lookups with an id at or below this were issued before the last `clear`.
    cleared_through: u64,
}

/// Owns the request lifecycle and the one `LookupState` instance.
///
/// Clones share the same state. Each lookup is tagged with an increasing id;
/// a response is applied only while its id is still the latest, so an older
/// request that resolves late never overwrites a newer one.
#[derive(Debug, Clone)]
pub struct LookupCoordinator {
    api: WhoisApi,
    shared: Arc<Mutex<Shared>>,
}

/// Trims and lowercases user input.
pub fn normalize_domain(input: &str) -> String {
    input.trim().to_lowercase()
}

impl LookupCoordinator {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        Ok(Self::with_api(WhoisApi::new(config)?))
    }

    pub fn with_api(api: WhoisApi) -> Self {
        Self {
            api,
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    pub fn snapshot(&self) -> LookupState {
        self.lock().state.clone()
    }

    /// Runs one request and stores its outcome. Failures end up in `error`.
    pub async fn lookup(&self, domain: &str, mode: LookupMode) {
        let domain = normalize_domain(domain);

        let id = {
            let mut shared = self.lock();
            shared.latest += 1;
            shared.state.is_loading = true;
            shared.state.error = None;
            shared.state.domain_record = None;
            shared.state.contact_record = None;
            shared.latest
        };
        debug!(id, %domain, %mode, "lookup started");

        let outcome = self.api.fetch(&domain, mode).await;

        let mut shared = self.lock();
        if id != shared.latest {
            debug!(id, latest = shared.latest, "discarding stale response");
            return;
        }
        shared.state.is_loading = false;

        if id <= shared.cleared_through {
            debug!(id, "discarding response issued before clear");
            return;
        }

        match outcome {
            Ok(LookupRecord::Domain(record)) => shared.state.domain_record = Some(record),
            Ok(LookupRecord::Contact(record)) => shared.state.contact_record = Some(record),
            Err(e) => {
                warn!(id, %domain, %mode, error = %e, "lookup failed");
                shared.state.error = Some(e.to_string());
            }
        }
        debug!(id, "lookup finished");
    }

    /// Drops both results and the error. Leaves `is_loading` alone.
    pub fn clear(&self) {
        let mut shared = self.lock();
        shared.cleared_through = shared.latest;
        shared.state.domain_record = None;
        shared.state.contact_record = None;
        shared.state.error = None;
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
