//! Shared domain enums

pub mod dining_table;
pub mod order;

pub use dining_table::TableStatus;
pub use order::OrderStatus;
