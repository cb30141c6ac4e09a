//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemDetail};
use crate::utils::time::now_millis;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "menu_item";

/// 新菜品 (已校验、已规范化)
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub price: f64,
    pub category: RecordId,
    pub description: Option<String>,
    pub is_available: bool,
}

/// 菜品部分更新 (已校验、已规范化)
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    /// record link, 单独 bind
    #[serde(skip)]
    pub category: Option<RecordId>,
}

#[derive(Debug, Serialize)]
struct MenuItemMerge {
    #[serde(flatten)]
    patch: MenuItemPatch,
    updated_at: i64,
}

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items with category fetched
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItemDetail>> {
        let items: Vec<MenuItemDetail> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY created_at FETCH category")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu items of one category, category fetched
    pub async fn find_by_category(&self, category: &RecordId) -> RepoResult<Vec<MenuItemDetail>> {
        let items: Vec<MenuItemDetail> = self
            .base
            .db()
            .query(
                "SELECT * FROM menu_item WHERE category = $category \
                 ORDER BY created_at FETCH category",
            )
            .bind(("category", category.clone()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id with category fetched
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<MenuItemDetail>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing FETCH category")
            .bind(("thing", id.clone()))
            .await?;
        let items: Vec<MenuItemDetail> = result.take(0)?;
        Ok(items.into_iter().next())
    }

    /// Create a new menu item
    pub async fn create(&self, data: NewMenuItem) -> RepoResult<MenuItem> {
        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "CREATE menu_item SET name = $name, price = $price, category = $category, \
                 description = $description, is_available = $is_available, \
                 created_at = $now, updated_at = $now",
            )
            .bind(("name", data.name))
            .bind(("price", data.price))
            .bind(("category", data.category))
            .bind(("description", data.description))
            .bind(("is_available", data.is_available))
            .bind(("now", now))
            .await?;

        let created: Vec<MenuItem> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Apply a partial update; `None` if the menu item does not exist
    pub async fn update(&self, id: &RecordId, patch: MenuItemPatch) -> RepoResult<Option<MenuItem>> {
        let category = patch.category.clone();
        let merge = MenuItemMerge {
            patch,
            updated_at: now_millis(),
        };

        // category 是 record link, 不能放进 MERGE 内容 (会被写成字符串)
        let mut sql = String::from("BEGIN TRANSACTION; UPDATE $thing MERGE $data;");
        if category.is_some() {
            sql.push_str(" UPDATE $thing SET category = $category;");
        }
        sql.push_str(" COMMIT TRANSACTION;");

        self.base
            .db()
            .query(sql)
            .bind(("thing", id.clone()))
            .bind(("data", merge))
            .bind(("category", category))
            .await?
            .check()?;

        let updated: Option<MenuItem> = self.base.db().select(id.clone()).await?;
        Ok(updated)
    }

    /// Delete a menu item; returns the deleted document, `None` if it did not exist
    pub async fn delete(&self, id: &RecordId) -> RepoResult<Option<MenuItem>> {
        let deleted: Option<MenuItem> = self.base.db().delete(id.clone()).await?;
        Ok(deleted)
    }
}
