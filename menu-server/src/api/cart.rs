//! Cart routes

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use shared::models::CartItem;
use shared::{AppError, AppResult};

use crate::order::cart_total;
use crate::server::ServerState;
use crate::store::MenuStore;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/cart", get(view).delete(clear))
        .route("/api/cart/items", post(add_item))
        .route(
            "/api/cart/items/{id}",
            put(set_quantity).delete(remove_item),
        )
}

/// Cart contents plus the running total
#[derive(Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total: i64,
}

fn cart_view(store: &MenuStore) -> CartView {
    let items = store.cart().to_vec();
    let total = cart_total(&items);
    CartView { items, total }
}

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub id: String,
}

#[derive(Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: i64,
}

/// GET /api/cart - current cart with total
async fn view(State(state): State<ServerState>) -> Json<CartView> {
    Json(cart_view(&state.store.read()))
}

/// POST /api/cart/items - add one unit of a menu item by id
///
/// An id already in the cart increments its entry; an unknown id is a 404.
async fn add_item(
    State(state): State<ServerState>,
    Json(request): Json<AddItemRequest>,
) -> AppResult<Json<CartView>> {
    let mut store = state.store.write();
    let item = store
        .find_menu_item(&request.id)
        .cloned()
        .ok_or_else(|| AppError::menu_item_not_found(&request.id))?;
    store.add_to_cart(item);
    Ok(Json(cart_view(&store)))
}

/// PUT /api/cart/items/:id - set an entry's quantity, zero or less removes
async fn set_quantity(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(request): Json<SetQuantityRequest>,
) -> Json<CartView> {
    let mut store = state.store.write();
    store.update_quantity(&id, request.quantity);
    Json(cart_view(&store))
}

/// DELETE /api/cart/items/:id - drop an entry regardless of quantity
async fn remove_item(State(state): State<ServerState>, Path(id): Path<String>) -> Json<CartView> {
    let mut store = state.store.write();
    store.remove_from_cart(&id);
    Json(cart_view(&store))
}

/// DELETE /api/cart - empty the cart
async fn clear(State(state): State<ServerState>) -> Json<CartView> {
    let mut store = state.store.write();
    store.clear_cart();
    Json(cart_view(&store))
}
