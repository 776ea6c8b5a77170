//! 配置模块
//!
//! YAML 配置文件，所有字段均有默认值；支持环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const ENV_BASE_URL: &str = "RELAY_DEVTOOLS_BASE_URL";
pub const ENV_STORAGE_DIR: &str = "RELAY_DEVTOOLS_STORAGE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置文件失败 {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析配置文件失败 {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("无效的 base_url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevToolsConfig {
    pub storage: StorageConfig,
    pub relay: RelayConfig,
    pub logging: LoggingConfig,
}

/// KV 存储目录配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("../../.kv-storage"),
        }
    }
}

/// 中继服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8787".to_string(),
            model: "claude-3-5-sonnet-20241022".to_string(),
            timeout_secs: 60,
        }
    }
}

impl RelayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 校验 base_url 并去掉末尾的 `/`
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("不支持的协议: {}", parsed.scheme()),
            });
        }
        Ok(self.base_url.trim_end_matches('/').to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// trace / debug / info / warn / error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

impl DevToolsConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 文件不存在时使用默认配置
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// 应用环境变量覆盖
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_STORAGE_DIR).ok(),
        )
    }

    fn with_overrides(mut self, base_url: Option<String>, storage_dir: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.relay.base_url = url;
        }
        if let Some(dir) = storage_dir.filter(|d| !d.trim().is_empty()) {
            self.storage.dir = PathBuf::from(dir);
        }
        self
    }
}

/// 默认配置文件路径: ~/.relay-devtools/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".relay-devtools")
        .join("config.yaml")
}
