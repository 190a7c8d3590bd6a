pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analyses",
            get(handlers::handle_list_analyses).post(handlers::handle_analyze_upload),
        )
        .route("/api/v1/analyses/text", post(handlers::handle_analyze_text))
        .route("/api/v1/analyses/:id", get(handlers::handle_get_analysis))
        .with_state(state)
}
