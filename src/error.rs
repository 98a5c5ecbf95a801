//! Tido 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Tido 错误类型
#[derive(Debug, Error)]
pub enum TidoError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP 请求错误（远端 API 调用）
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON 解析错误
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// 存储错误（通用）
    #[error("Storage error: {0}")]
    Storage(String),

    /// 资源不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 无效数据
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Tido Result 类型别名
pub type Result<T> = std::result::Result<T, TidoError>;

impl TidoError {
    /// 创建 HTTP 错误
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// 创建 Storage 错误
    #[allow(dead_code)]
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 创建 InvalidData 错误
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TidoError::http("connection refused");
        assert_eq!(err.to_string(), "HTTP error: connection refused");

        let err = TidoError::not_found("todo 42");
        assert_eq!(err.to_string(), "Not found: todo 42");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let tido_err: TidoError = io_err.into();
        assert!(matches!(tido_err, TidoError::Io(_)));
    }

    #[test]
    fn test_error_from_string() {
        let err = TidoError::storage("blob corrupt");
        assert!(err.to_string().contains("blob corrupt"));
    }
}
