//! Ticket generation route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;

use crate::state::AppState;

/// Returned for a blank description; the pipeline is not consulted.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter an issue description.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/tickets", post(create_ticket))
}

#[derive(serde::Deserialize)]
struct CreateTicketRequest {
    description: String,
}

/// POST /api/tickets: generate a ticket (or a rejection) from free text.
async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTicketRequest>,
) -> Response {
    if req.description.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": EMPTY_INPUT_MESSAGE })),
        )
            .into_response();
    }

    let outcome = state.pipeline.generate_ticket(&req.description);
    debug!("Ticket request resolved with status {}", outcome.status());
    Json(outcome).into_response()
}
