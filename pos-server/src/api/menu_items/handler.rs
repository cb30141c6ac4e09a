//! Menu Item API Handlers

use axum::extract::{Path, State};
use http::StatusCode;

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemDetail, MenuItemUpdate};
use crate::db::repository::menu_item::{MenuItemPatch, NewMenuItem};
use crate::db::repository::{
    CategoryRepository, MenuItemRepository, category, menu_item, parse_record_id,
};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, trim_optional, validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppJson, AppResult, ErrorCode};
use surrealdb::RecordId;

/// GET /api/menuitem - 获取所有菜品 (展开分类)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<MenuItemDetail>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_all().await?;
    Ok(ApiResponse::success(items))
}

/// GET /api/menuitem/category/{category_id} - 获取某分类下的菜品
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> AppResult<ApiResponse<Vec<MenuItemDetail>>> {
    let category = parse_record_id(category::TABLE, &category_id)?;
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo.find_by_category(&category).await?;
    Ok(ApiResponse::success(items))
}

/// GET /api/menuitem/{id} - 获取单个菜品 (展开分类)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<MenuItemDetail>> {
    let item_id = parse_record_id(menu_item::TABLE, &id)?;
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&item_id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(ApiResponse::success(item))
}

/// POST /api/menuitem - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MenuItemCreate>,
) -> AppResult<(StatusCode, ApiResponse<MenuItem>)> {
    let name = payload.name.trim().to_string();
    validate_required_text(&name, "name", MAX_NAME_LEN)?;
    validate_price(payload.price)?;
    let description = trim_optional(payload.description);
    validate_optional_text(&description, "description", MAX_NOTE_LEN)?;
    let category = existing_category(&state, &payload.category).await?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .create(NewMenuItem {
            name,
            price: payload.price,
            category,
            description,
            is_available: payload.is_available.unwrap_or(true),
        })
        .await?;
    tracing::info!(name = %item.name, category = %item.category, "Menu item created");

    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Menu item created!", item),
    ))
}

/// PUT /api/menuitem/{id} - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MenuItemUpdate>,
) -> AppResult<ApiResponse<MenuItem>> {
    let item_id = parse_record_id(menu_item::TABLE, &id)?;

    let name = match payload.name {
        Some(name) => {
            let name = name.trim().to_string();
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            Some(name)
        }
        None => None,
    };
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    let description = trim_optional(payload.description);
    validate_optional_text(&description, "description", MAX_NOTE_LEN)?;
    let category = match payload.category.as_deref() {
        Some(category) => Some(existing_category(&state, category).await?),
        None => None,
    };

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .update(
            &item_id,
            MenuItemPatch {
                name,
                price: payload.price,
                description,
                is_available: payload.is_available,
                category,
            },
        )
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(ApiResponse::success_with_message("Menu item updated", item))
}

/// DELETE /api/menuitem/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let item_id = parse_record_id(menu_item::TABLE, &id)?;
    let repo = MenuItemRepository::new(state.db.clone());
    repo.delete(&item_id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(menu_item_id = %item_id, "Menu item deleted");
    Ok(ApiResponse::ok("Menu item deleted successfully"))
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::new(ErrorCode::MenuItemInvalidPrice).with_detail("price", price));
    }
    Ok(())
}

/// 解析分类 ID 并确认分类存在
async fn existing_category(state: &ServerState, id: &str) -> AppResult<RecordId> {
    let category_id = parse_record_id(category::TABLE, id)?;
    let repo = CategoryRepository::new(state.db.clone());
    if repo.find_by_id(&category_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id));
    }
    Ok(category_id)
}

fn not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id)
}
