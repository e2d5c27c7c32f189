//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use edge_batch_provider::ApiError;

/// Core 层错误类型
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// 账户不存在
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// 校验错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 存储层错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Provider 错误（从库转换）
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// 是否为预期内行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，返回 `false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::AccountNotFound(_) | Self::ValidationError(_) => true,
            Self::Api(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core 层 Result 类型别名
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_not_found_display() {
        let err = CoreError::AccountNotFound("abc-123".to_string());
        assert_eq!(err.to_string(), "Account not found: abc-123");
    }

    #[test]
    fn api_error_passes_through_display() {
        let err = CoreError::from(ApiError::ZoneNotFound {
            domain: "example.com".to_string(),
        });
        assert_eq!(err.to_string(), "Zone not found");
    }

    #[test]
    fn expected_classification() {
        assert!(CoreError::AccountNotFound("x".to_string()).is_expected());
        assert!(CoreError::ValidationError("bad".to_string()).is_expected());
        assert!(!CoreError::StorageError("disk".to_string()).is_expected());
        assert!(!CoreError::Api(ApiError::Network {
            detail: "timeout".to_string()
        })
        .is_expected());
        assert!(CoreError::Api(ApiError::ZoneNotFound {
            domain: "x".to_string()
        })
        .is_expected());
    }
}
