use std::sync::Arc;

use crate::audit::client::AuditFetcher;
use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable audit fetcher. Production: PagespeedClient. Tests swap in
    /// a fake through this seam.
    pub auditor: Arc<dyn AuditFetcher>,
}
