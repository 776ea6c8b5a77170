//! 路由信息展示
//!
//! 将路由 ID 解析为 规则 -> 供应商 -> 模型 的可读摘要。

use crate::models::{is_known_rule, ProviderConfig, RouteConfig};
use crate::store::ConfigStore;
use std::collections::HashMap;
use std::fmt;

/// 供应商 ID 不在目录中时的占位名称
pub const UNKNOWN_PROVIDER: &str = "未知供应商";

const NOT_AVAILABLE: &str = "N/A";

const CUSTOM_RULE_SUFFIX: &str = " (自定义规则)";

/// 单条规则的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLine {
    pub rule: String,
    pub provider_id: String,
    /// 供应商显示名称，未知时为 [`UNKNOWN_PROVIDER`]
    pub provider_name: String,
    pub model: String,
    /// 规则名不在内置规则列表中
    pub custom: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub rules: Vec<RuleLine>,
}

impl RouteSummary {
    pub fn resolve(route: &RouteConfig, providers: &HashMap<String, ProviderConfig>) -> Self {
        let rules = route
            .rules
            .iter()
            .map(|(rule, target)| RuleLine {
                rule: rule.clone(),
                provider_id: target.provider_id.clone(),
                provider_name: providers
                    .get(&target.provider_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string()),
                model: target.model.clone(),
                custom: !is_known_rule(rule),
            })
            .collect();

        Self {
            id: route.id.clone(),
            name: route.name.clone(),
            description: route.description.clone(),
            created_at: route.created_at.clone(),
            rules,
        }
    }
}

/// 路由检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteInspection {
    /// 未指定 ID 且没有活动的路由配置
    NoActiveRoute,
    /// 路由 ID 不在目录中
    NotFound(String),
    Found(RouteSummary),
}

impl fmt::Display for RouteInspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteInspection::NoActiveRoute => write!(f, "没有活动的路由配置"),
            RouteInspection::NotFound(id) => write!(f, "路由配置 {id} 不存在"),
            RouteInspection::Found(summary) => {
                writeln!(f, "路由配置信息:")?;
                writeln!(f, "   ID: {}", summary.id)?;
                writeln!(f, "   名称: {}", summary.name)?;
                writeln!(
                    f,
                    "   描述: {}",
                    summary.description.as_deref().unwrap_or(NOT_AVAILABLE)
                )?;
                writeln!(
                    f,
                    "   创建时间: {}",
                    summary.created_at.as_deref().unwrap_or(NOT_AVAILABLE)
                )?;
                writeln!(f)?;
                write!(f, "路由规则:")?;
                for line in &summary.rules {
                    write!(
                        f,
                        "\n   {}: {} -> {}",
                        line.rule, line.provider_name, line.model
                    )?;
                    if line.custom {
                        f.write_str(CUSTOM_RULE_SUFFIX)?;
                    }
                }
                Ok(())
            }
        }
    }
}

pub struct RouteInspector<'a> {
    store: &'a ConfigStore,
}

impl<'a> RouteInspector<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// 解析路由信息；`route_id` 为空时使用当前选择中的 `routeId`（不区分选择类型）
    pub fn inspect(&self, route_id: Option<&str>) -> RouteInspection {
        let route_id = match route_id {
            Some(id) => id.to_string(),
            None => match self.store.get_current_route().and_then(|s| s.route_id) {
                Some(id) => id,
                None => return RouteInspection::NoActiveRoute,
            },
        };

        if route_id.is_empty() {
            return RouteInspection::NoActiveRoute;
        }

        let routes = self.store.get_available_routes();
        let Some(route) = routes.get(&route_id) else {
            return RouteInspection::NotFound(route_id);
        };

        let providers = self.store.get_providers();
        RouteInspection::Found(RouteSummary::resolve(route, &providers))
    }

    /// 输出路由信息到标准输出
    pub fn show_route_info(&self, route_id: Option<&str>) -> RouteInspection {
        let inspection = self.inspect(route_id);
        println!("{inspection}");
        inspection
    }
}
