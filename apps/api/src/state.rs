use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable persistence sink for finished analyses. Default: Postgres.
    pub store: Arc<dyn AnalysisStore>,
}
