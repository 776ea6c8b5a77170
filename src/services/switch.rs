use crate::services::route_inspector::{RouteInspection, RouteInspector};
use crate::store::ConfigStore;
use tracing::{error, info, warn};

/// 快速切换的路由类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickSwitchKind {
    Gemini,
    OpenAI,
    /// 使用 OpenAI 路由配置，但包含多条规则
    Mixed,
}

impl QuickSwitchKind {
    pub const ALL: [QuickSwitchKind; 3] = [
        QuickSwitchKind::Gemini,
        QuickSwitchKind::OpenAI,
        QuickSwitchKind::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuickSwitchKind::Gemini => "gemini",
            QuickSwitchKind::OpenAI => "openai",
            QuickSwitchKind::Mixed => "mixed",
        }
    }

    /// 对应的路由 ID
    pub fn route_id(&self) -> &'static str {
        match self {
            QuickSwitchKind::Gemini => "1754309894180",
            QuickSwitchKind::OpenAI | QuickSwitchKind::Mixed => "1754395690057",
        }
    }

    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(QuickSwitchKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for QuickSwitchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(QuickSwitchKind::Gemini),
            "openai" => Ok(QuickSwitchKind::OpenAI),
            "mixed" => Ok(QuickSwitchKind::Mixed),
            _ => Err(format!("不支持的路由类型: {s}")),
        }
    }
}

impl std::fmt::Display for QuickSwitchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct SwitchService {
    store: ConfigStore,
}

impl SwitchService {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// 切换到指定路由；目录中不存在该 ID 时仍然写入，仅记录警告
    pub fn switch_route(&self, route_id: &str) -> bool {
        if !self.store.get_available_routes().contains_key(route_id) {
            warn!("路由配置 {} 不在目录中，仍然切换", route_id);
        }

        if self.store.switch_route(route_id) {
            info!("已切换到路由配置: {}", route_id);
            true
        } else {
            false
        }
    }

    pub fn show_route_info(&self, route_id: Option<&str>) -> RouteInspection {
        RouteInspector::new(&self.store).show_route_info(route_id)
    }

    pub fn quick_switch_kind(&self, kind: QuickSwitchKind) -> bool {
        let route_id = kind.route_id();
        info!("快速切换 {} -> {}", kind, route_id);

        let success = self.switch_route(route_id);
        if success {
            self.show_route_info(Some(route_id));
        }
        success
    }

    /// 按名称快速切换；未知类型不修改当前选择
    pub fn quick_switch(&self, kind: &str) -> bool {
        match kind.parse::<QuickSwitchKind>() {
            Ok(kind) => self.quick_switch_kind(kind),
            Err(e) => {
                error!("{}", e);
                println!("{e}\n   支持的类型: {}", QuickSwitchKind::supported());
                false
            }
        }
    }
}
