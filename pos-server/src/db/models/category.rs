//! Category Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// 默认背景色
pub const DEFAULT_BG_COLOR: &str = "#5b45b0";
/// 默认图标
pub const DEFAULT_ICON: &str = "🍽️";

/// Category entity (菜品分类)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_bg_color() -> String {
    DEFAULT_BG_COLOR.to_string()
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default, alias = "bgColor")]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "bgColor", skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
