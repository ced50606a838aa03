//! taskdeck 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// taskdeck 错误类型
#[derive(Debug, Error)]
#[allow(dead_code)] // 部分变体由调用方按需构造，尚未全部使用
pub enum TaskdeckError {
    /// I/O 错误（文件读写、响应体读取等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP 传输层错误（连接失败、DNS 等）
    #[error("HTTP error: {0}")]
    Http(String),

    /// API 返回非成功状态码
    #[error("API error: status {status}")]
    Api { status: u16 },

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON 解析错误
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// taskdeck Result 类型别名
pub type Result<T> = std::result::Result<T, TaskdeckError>;

#[allow(dead_code)] // 部分方法尚未使用
impl TaskdeckError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 Http 错误
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}

impl From<ureq::Error> for TaskdeckError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => Self::Api { status },
            other => Self::Http(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskdeckError::Api { status: 401 };
        assert_eq!(err.to_string(), "API error: status 401");

        let err = TaskdeckError::http("connection refused");
        assert_eq!(err.to_string(), "HTTP error: connection refused");

        let err = TaskdeckError::config("missing server url");
        assert_eq!(err.to_string(), "Config error: missing server url");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TaskdeckError = io_err.into();
        assert!(matches!(err, TaskdeckError::Io(_)));
    }
}
