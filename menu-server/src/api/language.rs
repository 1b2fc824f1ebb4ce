//! Language routes

use axum::{Json, Router, extract::State, routing::put};
use serde::Deserialize;
use shared::models::Language;

use crate::server::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/language", put(set))
}

#[derive(Deserialize)]
pub struct SetLanguageRequest {
    pub language: Language,
}

/// PUT /api/language - switch the UI language (persisted)
async fn set(
    State(state): State<ServerState>,
    Json(request): Json<SetLanguageRequest>,
) -> Json<Language> {
    let mut store = state.store.write();
    store.set_language(request.language);
    Json(store.language())
}
