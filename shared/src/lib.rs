//! Shared types for the POS server
//!
//! Types used by both the server and its clients: error codes, the API
//! response envelope, and the order/table status enums.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{OrderStatus, TableStatus};
