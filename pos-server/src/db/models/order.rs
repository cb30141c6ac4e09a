//! Order Model

use super::serde_helpers;
use super::{DiningTable, OrderStatus};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// 顾客信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

fn default_guests() -> u32 {
    1
}

/// 订单行
///
/// `price` 是整行金额 (单价 × 数量)。`menu_item` 以字符串快照保存，
/// 菜品之后被修改或删除不影响历史订单。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub menu_item: Option<RecordId>,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// 账单金额
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bills {
    pub total: f64,
    pub tax: f64,
    #[serde(alias = "totalWithTax")]
    pub total_with_tax: f64,
}

impl Bills {
    /// 按税率 (百分比) 从行金额计算账单, 金额保留两位小数
    pub fn from_items(items: &[OrderItem], tax_rate: f64) -> Self {
        let total = round_cents(items.iter().map(|i| i.price).sum());
        let tax = round_cents(total * tax_rate / 100.0);
        Self {
            total,
            tax,
            total_with_tax: round_cents(total + tax),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Order entity (订单)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub customer_details: CustomerDetails,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub bills: Bills,
    #[serde(default)]
    pub status: OrderStatus,
    /// 占用的餐桌 (record link)
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub table: Option<RecordId>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Order with its table document inline (`FETCH table`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub customer_details: CustomerDetails,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub bills: Bills,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub table: Option<DiningTable>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// 创建订单时的订单行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    #[serde(default, alias = "menuItem")]
    pub menu_item: Option<String>,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Create order payload
///
/// 请求中的状态字段会被忽略，新订单总是 `In Progress`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(alias = "customerDetails")]
    pub customer_details: CustomerDetails,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
    #[serde(default)]
    pub bills: Option<Bills>,
    #[serde(default)]
    pub table: Option<String>,
}

/// Update order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    #[serde(alias = "orderStatus")]
    pub order_status: OrderStatus,
}

/// 仪表盘统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: usize,
    pub in_progress: usize,
    pub ready: usize,
    pub completed: usize,
    /// 已完成订单的含税总额
    pub revenue: f64,
    /// 按电话号码去重的顾客数
    pub unique_customers: usize,
    pub available_tables: usize,
    pub booked_tables: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64) -> OrderItem {
        OrderItem {
            menu_item: None,
            name: "Paneer Tikka".into(),
            quantity: 1,
            price,
        }
    }

    #[test]
    fn test_bills_from_items() {
        let bills = Bills::from_items(&[item(250.0), item(150.0)], 5.25);
        assert_eq!(bills.total, 400.0);
        assert_eq!(bills.tax, 21.0);
        assert_eq!(bills.total_with_tax, 421.0);
    }

    #[test]
    fn test_bills_rounding() {
        let bills = Bills::from_items(&[item(9.99)], 5.25);
        assert_eq!(bills.tax, 0.52);
        assert_eq!(bills.total_with_tax, 10.51);
    }

    #[test]
    fn test_bills_empty() {
        assert_eq!(Bills::from_items(&[], 5.25), Bills::default());
    }

    #[test]
    fn test_status_update_accepts_camel_case() {
        let update: OrderStatusUpdate =
            serde_json::from_str(r#"{"orderStatus":"Completed"}"#).unwrap();
        assert_eq!(update.order_status, OrderStatus::Completed);

        let update: OrderStatusUpdate =
            serde_json::from_str(r#"{"order_status":"In Progress"}"#).unwrap();
        assert_eq!(update.order_status, OrderStatus::InProgress);
    }

    #[test]
    fn test_order_create_defaults() {
        let create: OrderCreate = serde_json::from_str(
            r#"{"customerDetails":{"name":"Amrit","phone":"9999999999","guests":2}}"#,
        )
        .unwrap();
        assert!(create.items.is_empty());
        assert!(create.bills.is_none());
        assert!(create.table.is_none());
        assert_eq!(create.customer_details.guests, 2);
    }
}
