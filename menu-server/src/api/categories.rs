//! Category routes

use axum::{Json, Router, routing::get};
use shared::models::Category;

use crate::catalog;
use crate::server::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/categories", get(list))
}

/// GET /api/categories - the fixed category list, in display order
async fn list() -> Json<Vec<Category>> {
    Json(catalog::categories())
}
