//! Order link route

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::{AppError, AppResult};

use crate::order::{OrderLink, build_order};
use crate::server::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/order/link", get(link))
}

#[derive(Deserialize)]
pub struct OrderQuery {
    /// Table identifier from the QR code, absent for the plain menu URL
    pub table: Option<String>,
}

/// GET /api/order/link?table= - WhatsApp deep link for the current cart
async fn link(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<OrderLink>> {
    let store = state.store.read();
    if store.cart().is_empty() {
        return Err(AppError::cart_empty());
    }

    let link = build_order(
        store.cart(),
        store.language(),
        query.table.as_deref(),
        &store.settings().whatsapp_number,
    );
    Ok(Json(link))
}
