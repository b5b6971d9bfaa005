use std::sync::Arc;

use crate::config::Config;
use crate::recommend::source::CandidateSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profile and candidate loader. Postgres in production, in-memory in tests.
    pub source: Arc<dyn CandidateSource>,
    pub config: Config,
}
