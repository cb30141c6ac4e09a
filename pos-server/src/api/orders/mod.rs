//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    let collection = get(handler::list).post(handler::create);
    Router::new()
        .route("/api/order", collection.clone())
        .route("/api/order/", collection)
        .route("/api/order/stats", get(handler::stats))
        .route(
            "/api/order/{id}",
            get(handler::get_by_id)
                .put(handler::update_status)
                .delete(handler::delete),
        )
}
