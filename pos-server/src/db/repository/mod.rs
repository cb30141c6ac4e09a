//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

// Menu
pub mod category;
pub mod menu_item;

// Orders & tables
pub mod dining_table;
pub mod order;

// Re-exports
pub use category::CategoryRepository;
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析并校验表名: parse_record_id("orders", "orders:abc")
//   - 获取表名: id.table()
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId
//   - 写入 record link 时单独 bind RecordId (模型上的 serde helper 会输出字符串)

/// 解析 `"table:key"` 并确认表名
///
/// 格式错误或表名不符都返回 [`RepoError::InvalidId`]，不访问数据库。
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let record: RecordId = id
        .trim()
        .parse()
        .map_err(|_| RepoError::InvalidId(id.to_string()))?;
    if record.table() != table {
        return Err(RepoError::InvalidId(id.to_string()));
    }
    Ok(record)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id_ok() {
        let id = parse_record_id("orders", "orders:abc123").unwrap();
        assert_eq!(id.table(), "orders");
        assert_eq!(id.to_string(), "orders:abc123");
    }

    #[test]
    fn test_parse_record_id_wrong_table() {
        assert!(matches!(
            parse_record_id("orders", "category:abc123"),
            Err(RepoError::InvalidId(_))
        ));
    }

    #[test]
    fn test_parse_record_id_malformed() {
        for bad in ["", "abc123", "orders:", "not an id", ":abc"] {
            assert!(
                matches!(parse_record_id("orders", bad), Err(RepoError::InvalidId(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
