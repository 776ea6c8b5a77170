//! 存储错误类型

use std::path::PathBuf;
use thiserror::Error;

/// 配置文件读写错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 文件读写失败
    #[error("读写文件失败 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 解析失败
    #[error("解析 JSON 失败 {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 序列化失败
    #[error("序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            StoreError::Io { path, .. } | StoreError::Parse { path, .. } => Some(path),
            StoreError::Serialize(_) => None,
        }
    }
}
