use thiserror::Error;

/// 服务器启动/运行期错误
///
/// 请求级错误统一使用 [`crate::AppError`]，这里只覆盖监听、初始化等进程级失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("初始化失败: {0}")]
    Init(#[from] crate::AppError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
