//! API route definitions for the Producto REST API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::core::AppState;

/// Create the `/productos` resource router
///
/// `/productos/` is routed on purpose: with no `{id}` segment the handlers
/// see an empty identifier and answer 400.
pub fn create_producto_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/productos",
            post(handlers::create_producto).get(handlers::list_productos),
        )
        .route(
            "/productos/",
            get(handlers::get_producto)
                .put(handlers::update_producto)
                .delete(handlers::delete_producto),
        )
        .route(
            "/productos/{id}",
            get(handlers::get_producto)
                .put(handlers::update_producto)
                .delete(handlers::delete_producto),
        )
}

/// Create the system routes
pub fn create_system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_check))
}
