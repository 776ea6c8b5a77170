use thiserror::Error;

/// 测试客户端错误
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    /// HTTP 客户端构建失败
    #[error("客户端构建错误: {0}")]
    Build(String),

    /// 连接失败、DNS 错误等传输层错误
    #[error("{0}")]
    Transport(String),

    /// 请求超时
    #[error("请求超时: {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// 非 200 响应
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// 响应体不是合法 JSON
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            ClientError::Timeout { timeout_ms }
        } else if err.is_builder() {
            ClientError::Build(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Timeout { .. })
    }
}
