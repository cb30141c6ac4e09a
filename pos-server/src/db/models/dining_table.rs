//! Dining Table Model

use super::serde_helpers;
use super::{Order, TableStatus};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dining table entity (桌台)
///
/// `current_order` 非空时 `status` 必为 `Booked`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub table_no: u32,
    #[serde(default = "default_seats")]
    pub seats: u32,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub current_order: Option<RecordId>,
    #[serde(default)]
    pub created_at: i64,
}

/// Dining table with its current order inline (`FETCH current_order`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableDetail {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub table_no: u32,
    #[serde(default = "default_seats")]
    pub seats: u32,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub current_order: Option<Order>,
    #[serde(default)]
    pub created_at: i64,
}

fn default_seats() -> u32 {
    4
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    #[serde(alias = "tableNo")]
    pub table_no: u32,
    #[serde(default = "default_seats")]
    pub seats: u32,
}

/// Update dining table payload (预订 / 手动修改状态)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
    #[serde(default, alias = "orderId", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}
