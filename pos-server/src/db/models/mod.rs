//! Database Models

// Serde helpers
pub mod serde_helpers;

// Menu
pub mod category;
pub mod menu_item;

// Orders & tables
pub mod dining_table;
pub mod order;

// Re-exports
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableDetail, DiningTableUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemDetail, MenuItemUpdate};
pub use order::{
    Bills, CustomerDetails, Order, OrderCreate, OrderDetail, OrderItem, OrderItemInput,
    OrderStats, OrderStatusUpdate,
};
pub use shared::models::{OrderStatus, TableStatus};
