//! Settings routes

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use shared::models::{SettingsUpdate, StoreSettings};

use crate::server::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/settings", get(current).put(update))
        .route("/api/settings/refresh", post(refresh))
}

/// GET /api/settings - settings currently in effect
async fn current(State(state): State<ServerState>) -> Json<StoreSettings> {
    Json(state.store.read().settings().clone())
}

/// PUT /api/settings - optimistic update
///
/// Commits locally and fires a detached remote upsert; the response
/// reflects the local commit, whatever the remote outcome.
async fn update(
    State(state): State<ServerState>,
    Json(update): Json<SettingsUpdate>,
) -> Json<StoreSettings> {
    state.settings_sync.push(&state.store, update);
    Json(state.store.read().settings().clone())
}

/// POST /api/settings/refresh - pull the remote record
async fn refresh(State(state): State<ServerState>) -> Json<StoreSettings> {
    let settings = state.settings_sync.refresh(&state.store).await;
    Json(settings)
}
