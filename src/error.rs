//! 领域层统一错误定义
//!
//! 聚焦序列化、事件派发与取值校验等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 事件派发 ---
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },
    #[error("dispatch cancelled: delivered={delivered}, remaining={remaining}")]
    DispatchCancelled { delivered: usize, remaining: usize },

    // --- 领域取值 ---
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
