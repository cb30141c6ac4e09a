//! Dining Table API Handlers

use axum::extract::{Path, State};
use http::StatusCode;

use crate::core::ServerState;
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableDetail, DiningTableUpdate};
use crate::utils::{ApiResponse, AppJson, AppResult};

/// GET /api/table - 获取所有餐桌 (按桌号, 展开当前订单)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<DiningTableDetail>>> {
    let tables = state.order_lifecycle().get_tables().await?;
    Ok(ApiResponse::success(tables))
}

/// POST /api/table - 新增餐桌
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DiningTableCreate>,
) -> AppResult<(StatusCode, ApiResponse<DiningTable>)> {
    let table = state.order_lifecycle().add_table(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Table added!", table),
    ))
}

/// PUT /api/table/{id} - 预订 / 手动修改状态
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<DiningTableUpdate>,
) -> AppResult<ApiResponse<DiningTableDetail>> {
    let table = state.order_lifecycle().update_table(&id, payload).await?;
    Ok(ApiResponse::success_with_message("Table updated!", table))
}
