//! 数据库模块
//!
//! 嵌入式 SurrealDB (RocksDB 引擎)。所有记录 ID 在 API 中统一以
//! `"table:key"` 字符串表示。

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// SurrealDB namespace
pub const NAMESPACE: &str = "pos";
/// SurrealDB database name
pub const DATABASE: &str = "pos";

/// 表结构定义
///
/// 表本身是 SCHEMALESS，字段由 Rust 模型约束；
/// 这里只声明表、查询用索引和 `table_no` 唯一约束。
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS category SCHEMALESS;
DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
DEFINE TABLE IF NOT EXISTS dining_table SCHEMALESS;
DEFINE INDEX IF NOT EXISTS menu_item_category ON TABLE menu_item FIELDS category;
DEFINE INDEX IF NOT EXISTS orders_created_at ON TABLE orders FIELDS created_at;
DEFINE INDEX IF NOT EXISTS dining_table_no ON TABLE dining_table FIELDS table_no UNIQUE;
"#;

/// 数据库服务
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// 打开 (或创建) `path` 下的数据库，选择 namespace/database 并定义表结构
    pub async fn new(path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {}", e)))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {}", e)))?;

        define_schema(&db).await?;

        Ok(Self { db })
    }
}

/// 定义表和索引 (幂等)
pub async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(SCHEMA)
        .await
        .and_then(|response| response.check())
        .map_err(|e| AppError::database(format!("Failed to define schema: {}", e)))?;
    Ok(())
}
