//! 路由运维服务
//!
//! 切换当前路由并展示路由信息

pub mod route_inspector;
pub mod switch;

pub use route_inspector::{
    RouteInspection, RouteInspector, RouteSummary, RuleLine, UNKNOWN_PROVIDER,
};
pub use switch::{QuickSwitchKind, SwitchService};
