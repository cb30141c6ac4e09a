//! Menu Item API 模块

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

/// Menu item router
pub fn router() -> Router<ServerState> {
    let collection = get(handler::list).post(handler::create);
    Router::new()
        .route("/api/menuitem", collection.clone())
        .route("/api/menuitem/", collection)
        .route(
            "/api/menuitem/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/api/menuitem/category/{category_id}",
            get(handler::list_by_category),
        )
}
