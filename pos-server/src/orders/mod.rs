//! 订单模块
//!
//! - [`OrderLifecycle`] - 订单状态与餐桌占用的联动 (创建、改状态、删除、预订)
//! - [`compute_stats`] - 仪表盘统计

pub mod lifecycle;
pub mod stats;

pub use lifecycle::OrderLifecycle;
pub use stats::compute_stats;
