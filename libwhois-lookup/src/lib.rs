mod api;
mod coordinator;
mod error;
mod http;
mod types;
pub mod view;

pub use api::{LookupRecord, WhoisApi};
pub use coordinator::{normalize_domain, LookupCoordinator};
pub use error::{LookupError, FALLBACK_MESSAGE};
pub use types::{
    ContactRecord, DomainRecord, HistoryEntry, LookupConfig, LookupMode, LookupState,
    DEFAULT_API_BASE,
};

/// One-off lookup against `config.api_base`, returning the resulting state.
pub async fn lookup(
    config: &LookupConfig,
    domain: &str,
    mode: LookupMode,
) -> Result<LookupState, LookupError> {
    let coordinator = LookupCoordinator::new(config)?;
    coordinator.lookup(domain, mode).await;
    Ok(coordinator.snapshot())
}
