//! Category Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::utils::time::now_millis;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

/// MERGE 内容: 只包含提供的字段
#[derive(Debug, Serialize)]
struct CategoryMerge {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    updated_at: i64,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories (oldest first)
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Category>> {
        let category: Option<Category> = self.base.db().select(id.clone()).await?;
        Ok(category)
    }

    /// Create a new category
    ///
    /// `bg_color` / `icon` 缺省时使用默认值
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "CREATE category SET name = $name, bg_color = $bg_color, icon = $icon, \
                 created_at = $now, updated_at = $now",
            )
            .bind(("name", data.name))
            .bind((
                "bg_color",
                data.bg_color
                    .unwrap_or_else(|| crate::db::models::category::DEFAULT_BG_COLOR.to_string()),
            ))
            .bind((
                "icon",
                data.icon
                    .unwrap_or_else(|| crate::db::models::category::DEFAULT_ICON.to_string()),
            ))
            .bind(("now", now))
            .await?;

        let created: Vec<Category> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Merge the provided fields into a category; `None` if it does not exist
    pub async fn update(
        &self,
        id: &RecordId,
        data: CategoryUpdate,
    ) -> RepoResult<Option<Category>> {
        let merge = CategoryMerge {
            name: data.name,
            bg_color: data.bg_color,
            icon: data.icon,
            updated_at: now_millis(),
        };

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", id.clone()))
            .bind(("data", merge))
            .await?;

        let updated: Vec<Category> = result.take(0)?;
        Ok(updated.into_iter().next())
    }

    /// Delete a category; returns the deleted document, `None` if it did not exist
    pub async fn delete(&self, id: &RecordId) -> RepoResult<Option<Category>> {
        let deleted: Option<Category> = self.base.db().delete(id.clone()).await?;
        Ok(deleted)
    }
}
