//! Order API Handlers
//!
//! 业务规则在 [`crate::orders::OrderLifecycle`]，这里只做请求/响应转换。

use axum::extract::{Path, State};
use http::StatusCode;

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderDetail, OrderStats, OrderStatusUpdate};
use crate::utils::{ApiResponse, AppJson, AppResult};

/// GET /api/order - 获取所有订单 (最新在前, 展开餐桌)
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<OrderDetail>>> {
    let orders = state.order_lifecycle().get_orders().await?;
    Ok(ApiResponse::success(orders))
}

/// GET /api/order/stats - 仪表盘统计
pub async fn stats(State(state): State<ServerState>) -> AppResult<ApiResponse<OrderStats>> {
    let stats = state.order_lifecycle().stats().await?;
    Ok(ApiResponse::success(stats))
}

/// GET /api/order/{id} - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let order = state.order_lifecycle().get_order(&id).await?;
    Ok(ApiResponse::success(order))
}

/// POST /api/order - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> AppResult<(StatusCode, ApiResponse<Order>)> {
    let order = state.order_lifecycle().create_order(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Order created!", order),
    ))
}

/// PUT /api/order/{id} - 修改订单状态, 完成时释放餐桌
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let order = state
        .order_lifecycle()
        .update_order_status(&id, payload.order_status)
        .await?;
    Ok(ApiResponse::success_with_message("Order updated", order))
}

/// DELETE /api/order/{id} - 删除订单并释放餐桌
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    state.order_lifecycle().delete_order(&id).await?;
    Ok(ApiResponse::ok("Order deleted successfully"))
}
