use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::utils::AppResult;

/// 默认税率 (百分比)
pub const DEFAULT_TAX_RATE: f64 = 5.25;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库位于 `WORK_DIR/database`) |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | JWT_SECRET | 开发环境自动生成 | JWT 密钥 (至少 32 字符, 生产环境必填) |
/// | JWT_ISSUER | pos-server | JWT 签发者 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (未设置时只输出到终端) |
/// | TAX_RATE | 5.25 | 税率百分比, 订单未提供账单时用于计算 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/pos HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 税率 (百分比)
    pub tax_rate: f64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。
    /// 只有 JWT 密钥在生产构建下缺失时返回错误。
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            jwt: JwtConfig::from_env()?,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|r| r.parse().ok())
                .filter(|r: &f64| r.is_finite() && *r >= 0.0)
                .unwrap_or(DEFAULT_TAX_RATE),
        })
    }

    /// 使用自定义值构造配置, 不读取环境变量
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16, jwt: JwtConfig) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port,
            jwt,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }

    /// 数据库目录
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::with_overrides("/tmp/pos", 9000, JwtConfig::for_secret("x".repeat(32)))
    }

    #[test]
    fn test_database_dir_under_work_dir() {
        let config = test_config();
        assert_eq!(config.database_dir(), PathBuf::from("/tmp/pos/database"));
    }

    #[test]
    fn test_overrides_use_defaults() {
        let config = test_config();
        assert_eq!(config.http_port, 9000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.tax_rate, DEFAULT_TAX_RATE);
        assert!(config.log_dir.is_none());
    }
}
