//! Category API 模块

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

/// Category router
pub fn router() -> Router<ServerState> {
    let collection = get(handler::list).post(handler::create);
    Router::new()
        .route("/api/category", collection.clone())
        .route("/api/category/", collection)
        .route(
            "/api/category/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
