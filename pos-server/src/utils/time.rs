//! 时间工具函数
//!
//! 数据库中所有时间戳统一存储为 `i64` Unix millis (UTC)。

/// 当前时间 (Unix millis)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        let a = now_millis();
        let b = now_millis();
        assert!(b >= a);
        // 2020-01-01 之后
        assert!(a > 1_577_836_800_000);
    }
}
