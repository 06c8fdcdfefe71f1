//! 中继层统一错误定义
//!
//! 聚焦消息解析、信封序列化、配置与事件流发布的最小必要集合，
//! 便于在各实现层统一转换为 `RelayError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RelayError {
    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 消息解析 ---
    #[error(
        "malformed user event message: expected at least {expected} quote-delimited segments, found {found}"
    )]
    MalformedMessage { expected: usize, found: usize },

    // --- 配置 ---
    #[error("configuration error: {reason}")]
    Config { reason: String },

    // --- 事件流发布 ---
    #[error("event hub error: {reason}")]
    EventHub { reason: String },
}

/// 统一 Result 类型别名
pub type RelayResult<T> = Result<T, RelayError>;

// ---- Cross-crate conversions for infrastructure convenience ----
// 允许在装配层直接使用 `?` 将 config 等错误转换为 RelayError

impl From<config::ConfigError> for RelayError {
    fn from(err: config::ConfigError) -> Self {
        RelayError::Config {
            reason: err.to_string(),
        }
    }
}
