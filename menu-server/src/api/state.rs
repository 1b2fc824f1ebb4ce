//! Store snapshot route

use axum::{Json, Router, extract::State, routing::get};

use crate::server::ServerState;
use crate::store::StoreSnapshot;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/state", get(snapshot))
}

/// GET /api/state - full store snapshot for the presentation layer
async fn snapshot(State(state): State<ServerState>) -> Json<StoreSnapshot> {
    Json(state.store.read().snapshot())
}
