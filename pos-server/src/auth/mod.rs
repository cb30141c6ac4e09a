//! 认证模块
//!
//! - [`JwtService`] - 令牌签发与校验
//! - [`require_auth`] - 保护 `/api/*` 的中间件
//! - [`CurrentUser`] - 注入到请求扩展的用户上下文

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
