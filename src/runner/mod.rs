//! 场景执行器
//!
//! 按输入顺序逐个执行场景（不并发、失败不中断），校验关键词并汇总报告。

pub mod fixtures;
mod report;
mod validation;

pub use fixtures::{load_scenarios, FixtureError};
pub use report::{build_report, render_summary};
pub use validation::{validate_keywords, PASSED_REASON};

use crate::client::{MessageOptions, RelayTestClient};
use crate::models::{Report, Scenario, ScenarioOutcome, ScenarioResult};
use tracing::{info, warn};

pub struct ScenarioRunner {
    client: RelayTestClient,
}

impl ScenarioRunner {
    pub fn new(client: RelayTestClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RelayTestClient {
        &self.client
    }

    /// 根据场景标志构建请求参数
    pub fn options_for(scenario: &Scenario) -> MessageOptions {
        let mut options = MessageOptions::new();
        if scenario.stream {
            options = options.with_stream(true);
        }
        if !scenario.tools.is_empty() {
            options = options.with_tools(scenario.tools.clone());
        }
        options
    }

    /// 执行单个场景；仅在请求成功时校验关键词
    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioResult {
        info!("测试场景: {}", scenario.name);

        let options = Self::options_for(scenario);
        let mut result = self.client.send_message(&scenario.prompt, &options).await;

        if result.success {
            let validation = validate_keywords(&result.content, &scenario.keywords);
            if validation.passed {
                info!("测试通过: {}", scenario.name);
            } else {
                warn!("测试失败: {} - {}", scenario.name, validation.reason);
            }
            result.validation = Some(validation);
        } else {
            warn!(
                "请求失败: {} - {}",
                scenario.name,
                result.error.as_deref().unwrap_or_default()
            );
        }

        info!("响应时间: {:.2}s", result.response_time);
        result
    }

    pub async fn run_batch_scenarios(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        info!("开始执行 {} 个测试场景", scenarios.len());

        let mut outcomes = Vec::with_capacity(scenarios.len());
        for (i, scenario) in scenarios.iter().enumerate() {
            info!("[{}/{}] 执行中...", i + 1, scenarios.len());
            let result = self.run_scenario(scenario).await;
            outcomes.push(ScenarioOutcome {
                scenario: scenario.clone(),
                result,
            });
        }
        outcomes
    }

    pub fn generate_report(&self, outcomes: Vec<ScenarioOutcome>) -> Report {
        let report = build_report(outcomes);
        info!("{}", render_summary(&report.summary));
        report
    }
}
