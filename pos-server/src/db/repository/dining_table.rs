//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableDetail, TableStatus};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tables ordered by number, current order fetched
    pub async fn find_all_detailed(&self) -> RepoResult<Vec<DiningTableDetail>> {
        let tables: Vec<DiningTableDetail> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY table_no FETCH current_order")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find all tables without expansion
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY table_no")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<DiningTable>> {
        let table: Option<DiningTable> = self.base.db().select(id.clone()).await?;
        Ok(table)
    }

    /// Find table by id with current order fetched
    pub async fn find_by_id_detailed(
        &self,
        id: &RecordId,
    ) -> RepoResult<Option<DiningTableDetail>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing FETCH current_order")
            .bind(("thing", id.clone()))
            .await?;
        let tables: Vec<DiningTableDetail> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Find table by number
    pub async fn find_by_table_no(&self, table_no: u32) -> RepoResult<Option<DiningTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE table_no = $table_no LIMIT 1")
            .bind(("table_no", table_no))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Create a new, available table
    pub async fn create(&self, table_no: u32, seats: u32) -> RepoResult<DiningTable> {
        if self.find_by_table_no(table_no).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                table_no
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                "CREATE dining_table SET table_no = $table_no, seats = $seats, \
                 status = $status, created_at = $now",
            )
            .bind(("table_no", table_no))
            .bind(("seats", seats))
            .bind(("status", TableStatus::Available.as_str()))
            .bind(("now", now_millis()))
            .await?;

        let created: Vec<DiningTable> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create table".to_string()))
    }

    /// 为订单预订餐桌，并在同一事务内把订单的 `table` 指向该餐桌
    ///
    /// `previous` 是订单原先占用的另一张餐桌，会在同一事务内释放。
    pub async fn book_for_order(
        &self,
        table: &RecordId,
        order: &RecordId,
        previous: Option<&RecordId>,
    ) -> RepoResult<()> {
        let mut sql = String::from("BEGIN TRANSACTION;");
        if previous.is_some() {
            sql.push_str(" UPDATE $previous SET status = $available, current_order = NONE;");
        }
        sql.push_str(
            " UPDATE $table SET status = $booked, current_order = $order; \
             UPDATE $order SET table = $table, updated_at = $now; \
             COMMIT TRANSACTION;",
        );

        self.base
            .db()
            .query(sql)
            .bind(("table", table.clone()))
            .bind(("order", order.clone()))
            .bind(("previous", previous.cloned()))
            .bind(("booked", TableStatus::Booked.as_str()))
            .bind(("available", TableStatus::Available.as_str()))
            .bind(("now", now_millis()))
            .await?
            .check()?;
        Ok(())
    }

    /// 手动设置餐桌状态
    ///
    /// 设为 `Available` 时同时清空 `current_order`；设为 `Booked` 时保持不变。
    pub async fn set_status(&self, table: &RecordId, status: TableStatus) -> RepoResult<()> {
        let sql = match status {
            TableStatus::Available => "UPDATE $table SET status = $status, current_order = NONE",
            TableStatus::Booked => "UPDATE $table SET status = $status",
        };
        self.base
            .db()
            .query(sql)
            .bind(("table", table.clone()))
            .bind(("status", status.as_str()))
            .await?
            .check()?;
        Ok(())
    }
}
