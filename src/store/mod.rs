//! 配置存储访问
//!
//! 直接读写 KV 存储目录中的 JSON 文件：
//! - `admin_selected_config.json`：当前选择（唯一可写文件）
//! - `admin_route_configs.json`：路由配置目录（只读）
//! - `admin_model_providers.json`：供应商目录（只读）
//!
//! 写入为整文件覆盖，无锁、非原子，最后写入者生效。

mod error;

pub use error::StoreError;

use crate::models::{ActiveSelection, ProviderConfig, RouteConfig};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub const SELECTED_CONFIG_FILE: &str = "admin_selected_config.json";
pub const ROUTE_CONFIGS_FILE: &str = "admin_route_configs.json";
pub const MODEL_PROVIDERS_FILE: &str = "admin_model_providers.json";

/// 配置存储
///
/// 每个可失败操作都有返回 `Result` 的 `try_*` 版本；
/// 不带前缀的版本记录日志后降级为"无数据"。
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn selection_path(&self) -> PathBuf {
        self.dir.join(SELECTED_CONFIG_FILE)
    }

    pub fn routes_path(&self) -> PathBuf {
        self.dir.join(ROUTE_CONFIGS_FILE)
    }

    pub fn providers_path(&self) -> PathBuf {
        self.dir.join(MODEL_PROVIDERS_FILE)
    }

    /// 读取当前选择；文件不存在时返回 `Ok(None)`
    pub fn try_get_current_route(&self) -> Result<Option<ActiveSelection>, StoreError> {
        read_json(&self.selection_path())
    }

    /// 覆盖写入 `{type: "route", routeId}`，不校验路由是否存在
    pub fn try_switch_route(&self, route_id: &str) -> Result<(), StoreError> {
        let path = self.selection_path();
        let selection = ActiveSelection::route(route_id);
        let content = serde_json::to_string_pretty(&selection)?;
        fs::write(&path, content).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("已写入当前选择: {:?} -> {}", path, route_id);
        Ok(())
    }

    pub fn try_get_available_routes(&self) -> Result<HashMap<String, RouteConfig>, StoreError> {
        let routes: Vec<RouteConfig> = read_catalog(&self.routes_path())?;
        Ok(routes.into_iter().map(|r| (r.id.clone(), r)).collect())
    }

    pub fn try_get_providers(&self) -> Result<HashMap<String, ProviderConfig>, StoreError> {
        let providers: Vec<ProviderConfig> = read_catalog(&self.providers_path())?;
        Ok(providers.into_iter().map(|p| (p.id.clone(), p)).collect())
    }

    pub fn get_current_route(&self) -> Option<ActiveSelection> {
        self.try_get_current_route().unwrap_or_else(|e| {
            error!("读取当前路由配置失败: {}", e);
            None
        })
    }

    pub fn switch_route(&self, route_id: &str) -> bool {
        match self.try_switch_route(route_id) {
            Ok(()) => true,
            Err(e) => {
                error!("切换路由配置失败: {}", e);
                false
            }
        }
    }

    pub fn get_available_routes(&self) -> HashMap<String, RouteConfig> {
        self.try_get_available_routes().unwrap_or_else(|e| {
            error!("读取路由配置失败: {}", e);
            HashMap::new()
        })
    }

    pub fn get_providers(&self) -> HashMap<String, ProviderConfig> {
        self.try_get_providers().unwrap_or_else(|e| {
            error!("读取供应商配置失败: {}", e);
            HashMap::new()
        })
    }

    /// 解析当前生效的路由配置
    ///
    /// 无选择、选择类型不是 route、或路由 ID 不在目录中时返回 `None`。
    pub fn active_route(&self) -> Option<RouteConfig> {
        let selection = self.get_current_route()?;
        let route_id = selection.active_route_id()?;
        self.get_available_routes().remove(route_id)
    }
}

/// 读取并解析 JSON 文件；文件不存在返回 `Ok(None)`
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// 读取目录文件（JSON 数组）
///
/// 文件本身无法解析时返回错误；单个条目无法解析时跳过该条目并记录警告。
fn read_catalog<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let entries: Vec<Value> = read_json(path)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("跳过无法解析的目录条目 {:?}[{}]: {}", path, index, e);
                None
            }
        })
        .collect())
}
