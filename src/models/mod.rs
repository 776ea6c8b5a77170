pub mod provider_model;
pub mod route_model;
pub mod scenario_model;

pub use provider_model::{ProviderConfig, ProviderKind, TransformerKind};
pub use route_model::{
    is_known_rule, ActiveSelection, ModelTarget, RouteConfig, RouteStatus, SelectionKind,
    KNOWN_RULES,
};
pub use scenario_model::{
    Report, ReportSummary, ResponseKind, Scenario, ScenarioOutcome, ScenarioResult, Validation,
};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 宽松反序列化：字段类型不符时视为缺失，不让单个目录项拖垮整个文件
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
