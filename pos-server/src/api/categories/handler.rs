//! Category API Handlers

use axum::extract::{Path, State};
use http::StatusCode;

use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::db::repository::{CategoryRepository, category, parse_record_id};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, trim_optional, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppJson, AppResult, ErrorCode};

/// GET /api/category - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(ApiResponse::success(categories))
}

/// GET /api/category/{id} - 获取单个分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Category>> {
    let category_id = parse_record_id(category::TABLE, &id)?;
    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&category_id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(ApiResponse::success(category))
}

/// POST /api/category - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    AppJson(mut payload): AppJson<CategoryCreate>,
) -> AppResult<(StatusCode, ApiResponse<Category>)> {
    payload.name = payload.name.trim().to_string();
    payload.bg_color = trim_optional(payload.bg_color);
    payload.icon = trim_optional(payload.icon);
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.bg_color, "bg_color", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.icon, "icon", MAX_SHORT_TEXT_LEN)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;
    tracing::info!(name = %category.name, "Category created");

    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Category created!", category),
    ))
}

/// PUT /api/category/{id} - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(mut payload): AppJson<CategoryUpdate>,
) -> AppResult<ApiResponse<Category>> {
    let category_id = parse_record_id(category::TABLE, &id)?;

    if let Some(name) = payload.name.as_mut() {
        *name = name.trim().to_string();
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    payload.bg_color = trim_optional(payload.bg_color);
    payload.icon = trim_optional(payload.icon);
    validate_optional_text(&payload.bg_color, "bg_color", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.icon, "icon", MAX_SHORT_TEXT_LEN)?;

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo
        .update(&category_id, payload)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(ApiResponse::success_with_message("Category updated", category))
}

/// DELETE /api/category/{id} - 删除分类
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let category_id = parse_record_id(category::TABLE, &id)?;
    let repo = CategoryRepository::new(state.db.clone());
    repo.delete(&category_id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(category_id = %category_id, "Category deleted");
    Ok(ApiResponse::ok("Category deleted successfully"))
}

fn not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id)
}
