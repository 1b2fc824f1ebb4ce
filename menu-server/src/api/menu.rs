//! Menu routes: customer view plus admin item management

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::models::{MenuItem, MenuItemPayload};
use shared::{AppError, AppResult};
use uuid::Uuid;
use validator::Validate;

use crate::server::ServerState;
use crate::store::{MenuFilter, filter_items};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(list).post(create))
        .route("/api/menu/{id}", axum::routing::put(update).delete(delete))
}

#[derive(Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// GET /api/menu?category=&q= - filtered customer view
///
/// The filters are recorded on the store (they are part of the snapshot)
/// and the projection is taken under the same lock.
async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> Json<Vec<MenuItem>> {
    let mut store = state.store.write();
    store.set_active_category(query.category);
    store.set_search_query(query.q.unwrap_or_default());

    let filter = MenuFilter {
        language: store.language(),
        category: store.active_category(),
        query: store.search_query(),
        match_description: true,
    };
    let items: Vec<MenuItem> = filter_items(store.menu_items(), &filter)
        .into_iter()
        .cloned()
        .collect();
    Json(items)
}

/// POST /api/menu - create an item, prepended to the menu
async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemPayload>,
) -> AppResult<Json<MenuItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let item = payload.into_item(Uuid::new_v4().to_string());
    state.store.write().add_menu_item(item.clone());
    Ok(Json(item))
}

/// PUT /api/menu/:id - replace an item, 404 when absent
async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemPayload>,
) -> AppResult<Json<MenuItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let item = payload.into_item(id.clone());
    if state.store.write().update_menu_item(item.clone()) {
        Ok(Json(item))
    } else {
        Err(AppError::menu_item_not_found(&id))
    }
}

/// DELETE /api/menu/:id - returns whether an item was removed
async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Json<bool> {
    Json(state.store.write().delete_menu_item(&id))
}
