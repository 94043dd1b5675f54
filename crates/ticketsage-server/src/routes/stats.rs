//! Model statistics and health routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use ticketsage_runtime::ModelSummary;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/health", get(health))
}

/// GET /api/stats: trained model summary.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ModelSummary> {
    Json(state.pipeline.summary().clone())
}

/// GET /api/health: liveness probe. Only reachable once the model is trained.
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "port": state.config.port,
    }))
}
