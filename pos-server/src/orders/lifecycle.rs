//! 订单 / 餐桌生命周期
//!
//! 订单状态变化与餐桌占用之间的联动都在这里：
//!
//! | 操作 | 对餐桌的影响 |
//! |------|-------------|
//! | 创建订单 | 无 (预订由 [`OrderLifecycle::update_table`] 完成) |
//! | 状态改为 `Completed` | 释放餐桌 (`Available`, `current_order = NONE`) |
//! | 删除订单 | 无论状态, 先释放餐桌再删除 |
//! | 预订餐桌 | `Booked`, `current_order` 与订单 `table` 互相指向 |
//!
//! 订单写入与餐桌写入在同一个数据库事务中提交。
//! 换桌时, 原餐桌已被其他订单占用则保持不变。

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use crate::db::models::{
    Bills, DiningTable, DiningTableCreate, DiningTableDetail, DiningTableUpdate, Order,
    OrderCreate, OrderDetail, OrderItem, OrderStats, OrderStatus, TableStatus,
};
use crate::db::repository::order::NewOrder;
use crate::db::repository::{
    DiningTableRepository, OrderRepository, dining_table, menu_item, order, parse_record_id,
};
use crate::orders::compute_stats;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_amount, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// 订单 / 餐桌生命周期服务
#[derive(Clone)]
pub struct OrderLifecycle {
    orders: OrderRepository,
    tables: DiningTableRepository,
    /// 税率 (百分比), 订单未提供账单时使用
    tax_rate: f64,
}

impl OrderLifecycle {
    pub fn new(db: Surreal<Db>, tax_rate: f64) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            tables: DiningTableRepository::new(db),
            tax_rate,
        }
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// 创建订单
    ///
    /// 新订单总是 `In Progress`，不会预订餐桌。
    pub async fn create_order(&self, data: OrderCreate) -> AppResult<Order> {
        let mut customer = data.customer_details;
        customer.name = customer.name.trim().to_string();
        customer.phone = customer.phone.trim().to_string();
        validate_required_text(&customer.name, "customer name", MAX_NAME_LEN)?;
        if customer.phone.len() > MAX_SHORT_TEXT_LEN {
            return Err(AppError::validation("customer phone is too long"));
        }
        if customer.guests == 0 {
            return Err(AppError::validation("guests must be at least 1"));
        }

        let items = data
            .items
            .into_iter()
            .map(|item| {
                let name = item.name.trim().to_string();
                validate_required_text(&name, "item name", MAX_NAME_LEN)?;
                if item.quantity == 0 {
                    return Err(AppError::validation(format!(
                        "quantity of {name} must be at least 1"
                    )));
                }
                validate_amount(item.price, "item price")?;
                let menu_item = item
                    .menu_item
                    .as_deref()
                    .map(|id| parse_record_id(menu_item::TABLE, id))
                    .transpose()?;
                Ok(OrderItem {
                    menu_item,
                    name,
                    quantity: item.quantity,
                    price: item.price,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let bills = match data.bills {
            Some(bills) => {
                validate_amount(bills.total, "bills.total")?;
                validate_amount(bills.tax, "bills.tax")?;
                validate_amount(bills.total_with_tax, "bills.total_with_tax")?;
                bills
            }
            None => Bills::from_items(&items, self.tax_rate),
        };

        let table = match data.table.as_deref() {
            Some(id) => {
                let table_id = parse_record_id(dining_table::TABLE, id)?;
                if self.tables.find_by_id(&table_id).await?.is_none() {
                    return Err(AppError::new(ErrorCode::TableNotFound).with_detail("id", id));
                }
                Some(table_id)
            }
            None => None,
        };

        let created = self
            .orders
            .create(NewOrder {
                customer_details: customer,
                items,
                bills,
                table,
            })
            .await?;

        tracing::info!(
            order_id = ?created.id.as_ref().map(|id| id.to_string()),
            table_id = ?created.table.as_ref().map(|id| id.to_string()),
            "Order created"
        );
        Ok(created)
    }

    /// 所有订单 (最新在前, 展开餐桌)
    pub async fn get_orders(&self) -> AppResult<Vec<OrderDetail>> {
        Ok(self.orders.find_all_detailed().await?)
    }

    /// 单个订单 (展开餐桌)
    pub async fn get_order(&self, id: &str) -> AppResult<OrderDetail> {
        let order_id = parse_record_id(order::TABLE, id)?;
        self.orders
            .find_by_id_detailed(&order_id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// 修改订单状态
    ///
    /// 只能前进 (`In Progress` → `Ready` → `Completed`, 可跳过 `Ready`)；
    /// 改为 `Completed` 时在同一事务内释放餐桌。
    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> AppResult<OrderDetail> {
        let order_id = parse_record_id(order::TABLE, id)?;
        let existing = self
            .orders
            .find_by_id(&order_id)
            .await?
            .ok_or_else(|| order_not_found(id))?;

        if !existing.status.can_transition_to(status) {
            return Err(AppError::new(ErrorCode::OrderInvalidStatusTransition)
                .with_detail("from", existing.status.as_str())
                .with_detail("to", status.as_str()));
        }

        let release = if status.is_completed() {
            self.table_to_release(&order_id, existing.table.as_ref())
                .await?
        } else {
            None
        };

        self.orders
            .update_status(&order_id, status, release.as_ref())
            .await?;

        tracing::info!(
            order_id = %order_id,
            from = %existing.status,
            to = %status,
            released_table = ?release.as_ref().map(|t| t.to_string()),
            "Order status updated"
        );

        self.orders
            .find_by_id_detailed(&order_id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// 删除订单
    ///
    /// 删除前读取订单的餐桌引用，无论订单状态都释放该餐桌。
    pub async fn delete_order(&self, id: &str) -> AppResult<()> {
        let order_id = parse_record_id(order::TABLE, id)?;
        let existing = self
            .orders
            .find_by_id(&order_id)
            .await?
            .ok_or_else(|| order_not_found(id))?;

        let release = self
            .table_to_release(&order_id, existing.table.as_ref())
            .await?;

        self.orders.delete(&order_id, release.as_ref()).await?;

        tracing::info!(
            order_id = %order_id,
            status = %existing.status,
            released_table = ?release.as_ref().map(|t| t.to_string()),
            "Order deleted"
        );
        Ok(())
    }

    /// 仪表盘统计
    pub async fn stats(&self) -> AppResult<OrderStats> {
        let orders = self.orders.find_all().await?;
        let tables = self.tables.find_all().await?;
        Ok(compute_stats(&orders, &tables))
    }

    // ========================================================================
    // Tables
    // ========================================================================

    /// 所有餐桌 (按桌号, 展开当前订单)
    pub async fn get_tables(&self) -> AppResult<Vec<DiningTableDetail>> {
        Ok(self.tables.find_all_detailed().await?)
    }

    /// 新增餐桌, 桌号重复返回 `TableNumberExists`
    pub async fn add_table(&self, data: DiningTableCreate) -> AppResult<DiningTable> {
        if data.table_no == 0 {
            return Err(AppError::validation("table_no must be at least 1"));
        }
        if data.seats == 0 {
            return Err(AppError::validation("seats must be at least 1"));
        }
        if self.tables.find_by_table_no(data.table_no).await?.is_some() {
            return Err(AppError::new(ErrorCode::TableNumberExists)
                .with_detail("table_no", data.table_no));
        }

        let created = self.tables.create(data.table_no, data.seats).await?;
        tracing::info!(table_no = created.table_no, seats = created.seats, "Table created");
        Ok(created)
    }

    /// 预订 / 手动修改餐桌状态
    ///
    /// - 带 `order_id`: 为该订单预订 (未给 `status` 时视为 `Booked`)
    /// - `Available`: 只有没有进行中的订单时允许，同时清空 `current_order`
    pub async fn update_table(
        &self,
        id: &str,
        update: DiningTableUpdate,
    ) -> AppResult<DiningTableDetail> {
        let table_id = parse_record_id(dining_table::TABLE, id)?;
        let table = self
            .tables
            .find_by_id(&table_id)
            .await?
            .ok_or_else(|| table_not_found(id))?;

        let target = match (update.status, update.order_id.as_deref()) {
            (Some(status), _) => status,
            (None, Some(_)) => TableStatus::Booked,
            (None, None) => {
                return Err(AppError::validation("Provide status or order_id"));
            }
        };

        let active = self.active_order(&table).await?;

        match (target, update.order_id.as_deref()) {
            (TableStatus::Available, Some(_)) => {
                return Err(AppError::validation(
                    "order_id can only be used to book a table",
                ));
            }
            (TableStatus::Available, None) => {
                if let Some(order) = active {
                    return Err(table_occupied(id, &order));
                }
                self.tables
                    .set_status(&table_id, TableStatus::Available)
                    .await?;
                tracing::info!(table_id = %table_id, "Table released manually");
            }
            (TableStatus::Booked, Some(order_id)) => {
                let order_rid = parse_record_id(order::TABLE, order_id)?;
                let order = self
                    .orders
                    .find_by_id(&order_rid)
                    .await?
                    .ok_or_else(|| order_not_found(order_id))?;
                if order.status.is_completed() {
                    return Err(AppError::validation(
                        "Cannot book a table for a completed order",
                    ));
                }
                if let Some(active) = active
                    && active.id.as_ref() != Some(&order_rid)
                {
                    return Err(table_occupied(id, &active));
                }

                // 订单原先占用的另一张餐桌一并释放
                let previous = match order.table.as_ref() {
                    Some(previous) if previous != &table_id => {
                        self.previous_table_to_release(&order_rid, previous).await?
                    }
                    _ => None,
                };

                self.tables
                    .book_for_order(&table_id, &order_rid, previous.as_ref())
                    .await?;
                tracing::info!(
                    table_id = %table_id,
                    order_id = %order_rid,
                    released_table = ?previous.as_ref().map(|t| t.to_string()),
                    "Table booked"
                );
            }
            (TableStatus::Booked, None) => {
                self.tables.set_status(&table_id, TableStatus::Booked).await?;
                tracing::info!(table_id = %table_id, "Table booked manually");
            }
        }

        self.tables
            .find_by_id_detailed(&table_id)
            .await?
            .ok_or_else(|| table_not_found(id))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// 餐桌当前的进行中订单 (`current_order` 存在且未完成)
    async fn active_order(&self, table: &DiningTable) -> AppResult<Option<Order>> {
        let Some(order_id) = table.current_order.as_ref() else {
            return Ok(None);
        };
        let order = self.orders.find_by_id(order_id).await?;
        Ok(order.filter(|o| !o.status.is_completed()))
    }

    /// 完成 / 删除订单时要释放的餐桌
    ///
    /// 订单引用了餐桌就释放，不管餐桌当前挂着哪个订单；餐桌已不存在时返回 `None`。
    async fn table_to_release(
        &self,
        order_id: &RecordId,
        table: Option<&RecordId>,
    ) -> AppResult<Option<RecordId>> {
        let Some(table_id) = table else {
            return Ok(None);
        };
        let Some(table) = self.tables.find_by_id(table_id).await? else {
            tracing::warn!(order_id = %order_id, table_id = %table_id, "Order references a missing table");
            return Ok(None);
        };
        if let Some(current) = table.current_order.as_ref()
            && current != order_id
        {
            tracing::warn!(
                order_id = %order_id,
                table_id = %table_id,
                current_order = %current,
                "Releasing table held by another order"
            );
        }
        Ok(Some(table_id.clone()))
    }

    /// 订单换桌时, 原餐桌是否应被释放
    ///
    /// 原餐桌不存在或已被其他订单占用时返回 `None`。
    async fn previous_table_to_release(
        &self,
        order_id: &RecordId,
        previous: &RecordId,
    ) -> AppResult<Option<RecordId>> {
        let Some(table) = self.tables.find_by_id(previous).await? else {
            return Ok(None);
        };
        match table.current_order.as_ref() {
            Some(current) if current != order_id => Ok(None),
            _ => Ok(Some(previous.clone())),
        }
    }
}

fn order_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::OrderNotFound).with_detail("id", id)
}

fn table_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::TableNotFound).with_detail("id", id)
}

fn table_occupied(id: &str, order: &Order) -> AppError {
    let err = AppError::new(ErrorCode::TableOccupied).with_detail("id", id);
    match order.id.as_ref() {
        Some(order_id) => err.with_detail("order_id", order_id.to_string()),
        None => err,
    }
}
