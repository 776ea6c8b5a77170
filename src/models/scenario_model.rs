//! 测试场景模型
//!
//! 场景定义、单次请求结果以及汇总报告的数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 声明式测试场景
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub prompt: String,
    #[serde(default)]
    pub stream: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            stream: false,
            tools: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn streaming(mut self) -> Self {
        self.stream = true;
        self
    }

    pub fn with_tools(mut self, tools: Vec<Value>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// 响应类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Stream,
    Normal,
}

/// 关键词校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub passed: bool,
    pub reason: String,
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// 单次请求结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub success: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResponseKind>,
    #[serde(default)]
    pub content: String,
    /// 响应耗时（秒）
    pub response_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 非 200 响应的 HTTP 状态码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
}

impl ScenarioResult {
    pub fn succeeded(
        kind: ResponseKind,
        content: String,
        response_time: f64,
        raw_response: Value,
    ) -> Self {
        Self {
            success: true,
            kind: Some(kind),
            content,
            response_time,
            raw_response: Some(raw_response),
            error: None,
            status: None,
            validation: None,
        }
    }

    pub fn failed(error: impl Into<String>, status: Option<u16>, response_time: f64) -> Self {
        Self {
            success: false,
            kind: None,
            content: String::new(),
            response_time,
            raw_response: None,
            error: Some(error.into()),
            status,
            validation: None,
        }
    }

    /// 请求成功且校验通过
    pub fn is_passed(&self) -> bool {
        self.success && self.validation.as_ref().is_some_and(|v| v.passed)
    }
}

/// 场景及其结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub result: ScenarioResult,
}

/// 报告汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// 通过率（百分比 0 - 100）
    pub pass_rate: f64,
    /// 平均响应时间（秒）
    pub avg_response_time: f64,
}

impl ReportSummary {
    pub fn from_outcomes(outcomes: &[ScenarioOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }

        let total = outcomes.len();
        let passed = outcomes.iter().filter(|o| o.result.is_passed()).count();
        let total_time: f64 = outcomes.iter().map(|o| o.result.response_time).sum();

        Self {
            total,
            passed,
            failed: total - passed,
            pass_rate: passed as f64 / total as f64 * 100.0,
            avg_response_time: total_time / total as f64,
        }
    }
}

/// 测试报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub details: Vec<ScenarioOutcome>,
    pub generated_at: DateTime<Utc>,
}
