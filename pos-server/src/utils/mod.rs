//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应结构 (from shared::error)
//! - [`AppJson`] - 把请求体解析错误转换为 [`AppError`] 的 JSON 提取器
//! - 日志、请求日志、输入校验

pub mod error;
pub mod logger;
pub mod request_log;
pub mod time;
pub mod validation;

pub use error::{ApiResponse, AppError, AppJson, AppResult, ErrorCategory, ErrorCode};
