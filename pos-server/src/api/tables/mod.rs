//! Dining Table API 模块

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Table router
pub fn router() -> Router<ServerState> {
    let collection = get(handler::list).post(handler::create);
    Router::new()
        .route("/api/table", collection.clone())
        .route("/api/table/", collection)
        .route("/api/table/{id}", put(handler::update))
}
