//! Claude Relay 开发测试工具
//!
//! - 路由工具：读写 KV 存储目录中的当前路由选择，查看路由目录
//! - 测试客户端：向中继服务发送测试消息，按关键词校验响应并生成报告

pub mod client;
pub mod config;
pub mod logger;
pub mod models;
pub mod runner;
pub mod services;
pub mod store;
pub mod stream;

#[cfg(test)]
mod test_support;

pub use client::{ClientError, MessageOptions, RelayTestClient};
pub use config::DevToolsConfig;
pub use models::{ActiveSelection, ProviderConfig, Report, RouteConfig, Scenario, ScenarioResult};
pub use runner::ScenarioRunner;
pub use services::{QuickSwitchKind, RouteInspection, RouteInspector, SwitchService};
pub use store::{ConfigStore, StoreError};

/// 按配置组装路由工具与场景执行器
pub struct DevTools {
    pub switch: SwitchService,
    pub runner: ScenarioRunner,
}

impl DevTools {
    pub fn from_config(config: &DevToolsConfig) -> Result<Self, ClientError> {
        logger::init(&config.logging);
        let store = ConfigStore::new(config.storage.dir.clone());
        let client = RelayTestClient::new(&config.relay)?;
        tracing::debug!(
            "relay-devtools: storage={:?}, relay={}",
            store.dir(),
            client.base_url()
        );
        Ok(Self {
            switch: SwitchService::new(store),
            runner: ScenarioRunner::new(client),
        })
    }

    pub fn store(&self) -> &ConfigStore {
        self.switch.store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_tools_from_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = DevToolsConfig::default();
        config.storage.dir = dir.path().to_path_buf();
        config.logging.enabled = false;

        let tools = DevTools::from_config(&config).unwrap();
        assert_eq!(tools.store().dir(), dir.path());
        assert_eq!(tools.runner.client().base_url(), "http://localhost:8787");

        assert!(tools.switch.quick_switch("gemini"));
        assert_eq!(
            tools.store().get_current_route(),
            Some(ActiveSelection::route("1754309894180"))
        );
    }

    #[test]
    fn test_dev_tools_rejects_bad_base_url() {
        let mut config = DevToolsConfig::default();
        config.relay.base_url = "not a url".to_string();
        config.logging.enabled = false;
        assert!(DevTools::from_config(&config).is_err());
    }
}
