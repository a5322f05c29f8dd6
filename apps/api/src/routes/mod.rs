pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::audit::handlers::handle_audit;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content Analyzer pipeline
        .route("/api/v1/analyze", post(handle_analyze))
        // Audit Response Projector pipeline
        .route("/api/v1/audit", post(handle_audit))
        .with_state(state)
}
