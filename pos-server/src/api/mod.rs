//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查 (无需认证)
//! - [`categories`] - 分类管理接口
//! - [`menu_items`] - 菜品管理接口
//! - [`orders`] - 订单管理接口
//! - [`tables`] - 餐桌管理接口
//!
//! 集合路由同时注册带与不带结尾斜杠的路径 (`/api/order` 与 `/api/order/`)。

pub mod health;

// Data models API
pub mod categories;
pub mod menu_items;
pub mod orders;
pub mod tables;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::utils::request_log::log_request;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppJson, AppResult};

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(orders::router())
        .merge(tables::router())
}

/// Build the complete application with state and middleware
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // JWT 认证中间件 - require_auth 内部跳过非 /api/ 路由
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
