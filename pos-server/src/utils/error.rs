//! 统一错误处理
//!
//! 错误类型本身定义在 `shared::error`，这里负责：
//! - 把仓储层的 [`RepoError`] 转换为 [`AppError`]
//! - [`AppJson`] 提取器：请求体不符合结构时返回 `ValidationFailed` (400)
//!
//! # 使用示例
//!
//! ```ignore
//! async fn create(
//!     State(state): State<ServerState>,
//!     AppJson(payload): AppJson<CategoryCreate>,
//! ) -> AppResult<(StatusCode, ApiResponse<Category>)> {
//!     // 返回错误
//!     Err(AppError::new(ErrorCode::CategoryNotFound))
//! }
//! ```

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::InvalidId(id) => AppError::invalid_id(id),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// JSON 请求体提取器
///
/// 与 `axum::Json` 相同，但缺失字段、类型错误等解析失败会以统一的
/// [`ApiResponse`] 信封返回 `ValidationFailed`。
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_mapping() {
        let err: AppError = RepoError::InvalidId("abc".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidId);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);

        let err: AppError = RepoError::Duplicate("table 3".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);

        let err: AppError = RepoError::Database("boom".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
