//! Order Repository
//!
//! 订单写入与餐桌释放放在同一个 SurrealDB 事务中执行，
//! 两个写操作要么都生效，要么都不生效。

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Bills, CustomerDetails, Order, OrderDetail, OrderItem, OrderStatus, TableStatus};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// `order` 与 `ORDER BY` 关键字冲突，表名使用复数
pub const TABLE: &str = "orders";

/// 释放餐桌的语句片段 (`$table` 需要单独 bind)
const RELEASE_TABLE: &str =
    "UPDATE $table SET status = $available, current_order = NONE;";

/// 新订单 (已校验、已规范化)
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_details: CustomerDetails,
    pub items: Vec<OrderItem>,
    pub bills: Bills,
    pub table: Option<RecordId>,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders with table fetched (newest first)
    pub async fn find_all_detailed(&self) -> RepoResult<Vec<OrderDetail>> {
        let orders: Vec<OrderDetail> = self
            .base
            .db()
            .query("SELECT * FROM orders ORDER BY created_at DESC FETCH table")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find all orders without expansion
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(id.clone()).await?;
        Ok(order)
    }

    /// Find order by id with table fetched
    pub async fn find_by_id_detailed(&self, id: &RecordId) -> RepoResult<Option<OrderDetail>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing FETCH table")
            .bind(("thing", id.clone()))
            .await?;
        let orders: Vec<OrderDetail> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Create a new order, always `In Progress`
    pub async fn create(&self, data: NewOrder) -> RepoResult<Order> {
        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "CREATE orders SET customer_details = $customer_details, items = $items, \
                 bills = $bills, status = $status, table = $table, \
                 created_at = $now, updated_at = $now",
            )
            .bind(("customer_details", data.customer_details))
            .bind(("items", data.items))
            .bind(("bills", data.bills))
            .bind(("status", OrderStatus::InProgress.as_str()))
            .bind(("table", data.table))
            .bind(("now", now))
            .await?;

        let created: Vec<Order> = result.take(0)?;
        created
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// 更新订单状态，`release` 非空时在同一事务内释放该餐桌
    pub async fn update_status(
        &self,
        id: &RecordId,
        status: OrderStatus,
        release: Option<&RecordId>,
    ) -> RepoResult<()> {
        let mut sql = String::from(
            "BEGIN TRANSACTION; UPDATE $order SET status = $status, updated_at = $now;",
        );
        if release.is_some() {
            sql.push_str(RELEASE_TABLE);
        }
        sql.push_str(" COMMIT TRANSACTION;");

        self.base
            .db()
            .query(sql)
            .bind(("order", id.clone()))
            .bind(("status", status.as_str()))
            .bind(("now", now_millis()))
            .bind(("table", release.cloned()))
            .bind(("available", TableStatus::Available.as_str()))
            .await?
            .check()?;
        Ok(())
    }

    /// 删除订单，`release` 非空时先在同一事务内释放该餐桌
    pub async fn delete(&self, id: &RecordId, release: Option<&RecordId>) -> RepoResult<()> {
        let mut sql = String::from("BEGIN TRANSACTION;");
        if release.is_some() {
            sql.push_str(RELEASE_TABLE);
        }
        sql.push_str(" DELETE $order; COMMIT TRANSACTION;");

        self.base
            .db()
            .query(sql)
            .bind(("order", id.clone()))
            .bind(("table", release.cloned()))
            .bind(("available", TableStatus::Available.as_str()))
            .await?
            .check()?;
        Ok(())
    }
}
