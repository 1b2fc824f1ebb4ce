//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`categories`] - static category list
//! - [`menu`] - customer menu view and admin item management
//! - [`cart`] - cart operations
//! - [`settings`] - store settings read/write/refresh
//! - [`language`] - UI language selection
//! - [`state`] - full store snapshot
//! - [`order`] - WhatsApp order link

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::server::ServerState;
use crate::server::middleware;

pub mod cart;
pub mod categories;
pub mod health;
pub mod language;
pub mod menu;
pub mod order;
pub mod settings;
pub mod state;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(menu::router())
        .merge(cart::router())
        .merge(settings::router())
        .merge(language::router())
        .merge(state::router())
        .merge(order::router())
}

/// Build a fully configured application with all middleware
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - the menu is served to arbitrary origins
        .layer(CorsLayer::permissive())
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
