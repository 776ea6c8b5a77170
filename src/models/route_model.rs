//! 路由模型
//!
//! 路由配置目录与当前选择的数据结构定义，字段命名与管理端写入的 JSON 保持一致（camelCase）。

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 已知的路由规则名称
pub const KNOWN_RULES: &[&str] = &["default", "longContext", "background", "think", "webSearch"];

/// 规则名是否为内置规则；其余视为自定义规则
pub fn is_known_rule(name: &str) -> bool {
    KNOWN_RULES.contains(&name)
}

/// 模型目标：供应商 + 具体模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelTarget {
    #[serde(default)]
    pub provider_id: String,
    #[serde(default)]
    pub model: String,
}

/// 路由状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// 单个路由配置
///
/// `rules` 使用 `IndexMap` 以保留文件中的规则顺序，展示时按原顺序输出。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: IndexMap<String, ModelTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(
        default,
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<RouteStatus>,
    #[serde(
        default,
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl RouteConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            rules: IndexMap::new(),
            config: None,
            status: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// 添加规则（同名规则会被覆盖，位置不变）
    pub fn with_rule(
        mut self,
        rule: impl Into<String>,
        provider_id: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        self.rules.insert(
            rule.into(),
            ModelTarget {
                provider_id: provider_id.into(),
                model: model.into(),
            },
        );
        self
    }

    /// 默认规则
    pub fn default_target(&self) -> Option<&ModelTarget> {
        self.rules.get("default")
    }

    /// 长上下文阈值（字符数），来自 `config.longContextThreshold`
    pub fn long_context_threshold(&self) -> Option<u64> {
        self.config
            .as_ref()
            .and_then(|c| c.get("longContextThreshold"))
            .and_then(Value::as_u64)
    }

    pub fn is_active(&self) -> bool {
        self.status != Some(RouteStatus::Inactive)
    }
}

/// 选择类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    /// 直连 Claude，不经过路由
    Claude,
    /// 使用路由配置
    Route,
    #[serde(other)]
    Unknown,
}

/// 当前生效的选择，对应 `admin_selected_config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSelection {
    #[serde(rename = "type")]
    pub kind: SelectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_id: Option<String>,
}

impl ActiveSelection {
    pub fn route(route_id: impl Into<String>) -> Self {
        Self {
            kind: SelectionKind::Route,
            route_id: Some(route_id.into()),
        }
    }

    /// 仅当类型为 route 时返回路由 ID
    pub fn active_route_id(&self) -> Option<&str> {
        match self.kind {
            SelectionKind::Route => self.route_id.as_deref(),
            SelectionKind::Claude | SelectionKind::Unknown => None,
        }
    }
}
