//! Menu Item Model

use super::serde_helpers;
use super::Category;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Menu item entity (菜品)
///
/// `category` 是 record link，读取列表/详情时使用 [`MenuItemDetail`] 展开。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub price: f64,
    #[serde(with = "serde_helpers::record_id")]
    pub category: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Menu item with its category document inline (`FETCH category`)
///
/// 分类被删除后 `category` 为 `None`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemDetail {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
///
/// `category` 必填，缺失时请求体解析失败 (400)。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "isAvailable")]
    pub is_available: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, alias = "isAvailable", skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
