//! 仪表盘统计

use std::collections::HashSet;

use crate::db::models::{DiningTable, Order, OrderStats, OrderStatus, TableStatus};

/// 汇总订单和餐桌
///
/// - `revenue`: 已完成订单的 `total_with_tax` 之和
/// - `unique_customers`: 非空电话号码去重
pub fn compute_stats(orders: &[Order], tables: &[DiningTable]) -> OrderStats {
    let mut stats = OrderStats {
        total_orders: orders.len(),
        ..OrderStats::default()
    };

    let mut phones = HashSet::new();
    for order in orders {
        match order.status {
            OrderStatus::InProgress => stats.in_progress += 1,
            OrderStatus::Ready => stats.ready += 1,
            OrderStatus::Completed => {
                stats.completed += 1;
                stats.revenue += order.bills.total_with_tax;
            }
        }
        let phone = order.customer_details.phone.trim();
        if !phone.is_empty() {
            phones.insert(phone);
        }
    }
    stats.unique_customers = phones.len();
    stats.revenue = (stats.revenue * 100.0).round() / 100.0;

    for table in tables {
        match table.status {
            TableStatus::Available => stats.available_tables += 1,
            TableStatus::Booked => stats.booked_tables += 1,
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Bills, CustomerDetails};

    fn order(phone: &str, status: OrderStatus, total_with_tax: f64) -> Order {
        Order {
            id: None,
            customer_details: CustomerDetails {
                name: "Guest".into(),
                phone: phone.into(),
                guests: 2,
            },
            items: vec![],
            bills: Bills {
                total: total_with_tax,
                tax: 0.0,
                total_with_tax,
            },
            status,
            table: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn table(table_no: u32, status: TableStatus) -> DiningTable {
        DiningTable {
            id: None,
            table_no,
            seats: 4,
            status,
            current_order: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute_stats(&[], &[]), OrderStats::default());
    }

    #[test]
    fn test_counts_and_revenue() {
        let orders = vec![
            order("111", OrderStatus::InProgress, 10.0),
            order("222", OrderStatus::Ready, 20.0),
            order("111", OrderStatus::Completed, 30.5),
            order("333", OrderStatus::Completed, 12.25),
            order("", OrderStatus::Completed, 1.0),
        ];
        let tables = vec![
            table(1, TableStatus::Available),
            table(2, TableStatus::Booked),
            table(3, TableStatus::Booked),
        ];

        let stats = compute_stats(&orders, &tables);
        assert_eq!(stats.total_orders, 5);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.ready, 1);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.revenue, 43.75);
        assert_eq!(stats.unique_customers, 3);
        assert_eq!(stats.available_tables, 1);
        assert_eq!(stats.booked_tables, 2);
    }
}
