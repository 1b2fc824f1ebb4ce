//! Health check route

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::server::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    is_menu_open: bool,
}

/// GET /api/health - liveness probe
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let is_menu_open = state.store.read().settings().is_menu_open;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        is_menu_open,
    })
}
