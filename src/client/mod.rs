//! Claude Relay 测试客户端
//!
//! 对中继服务发起健康检查与 `/v1/messages` 请求，将流式与非流式响应统一为纯文本。
//! 不重试；每次调用等待响应或超时后才返回。

mod error;
mod extract;

pub use error::ClientError;
pub use extract::extract_content;

use crate::config::RelayConfig;
use crate::logger::body_preview;
use crate::models::{ResponseKind, ScenarioResult};
use crate::stream::parse_stream;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use std::time::Instant;
use tracing::{debug, warn};

pub const HEALTH_PATH: &str = "/v1/health";
pub const MESSAGES_PATH: &str = "/v1/messages";
const EVENT_STREAM: &str = "text/event-stream";

/// 请求附加参数，合并到请求体顶层
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOptions {
    pub stream: Option<bool>,
    pub tools: Option<Vec<Value>>,
    /// 其他字段，如 `max_tokens`
    pub extra: Map<String, Value>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }

    pub fn with_tools(mut self, tools: Vec<Value>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    fn merge_into(&self, body: &mut Map<String, Value>) {
        for (key, value) in &self.extra {
            body.insert(key.clone(), value.clone());
        }
        if let Some(stream) = self.stream {
            body.insert("stream".to_string(), Value::Bool(stream));
        }
        if let Some(ref tools) = self.tools {
            body.insert("tools".to_string(), Value::Array(tools.clone()));
        }
    }
}

/// 构建 Messages API 请求体
pub fn build_request_body(model: &str, prompt: &str, options: &MessageOptions) -> Value {
    let mut body = Map::new();
    body.insert("model".to_string(), json!(model));
    body.insert(
        "messages".to_string(),
        json!([{"role": "user", "content": prompt}]),
    );
    options.merge_into(&mut body);
    Value::Object(body)
}

#[derive(Debug, Clone)]
pub struct RelayTestClient {
    http: Client,
    base_url: String,
    model: String,
    timeout_ms: u64,
}

impl RelayTestClient {
    pub fn new(config: &RelayConfig) -> Result<Self, ClientError> {
        let base_url = config
            .normalized_base_url()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            model: config.model.clone(),
            timeout_ms: config.timeout().as_millis() as u64,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// `GET /v1/health`，仅 200 视为健康
    pub async fn health_check(&self) -> bool {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status() == StatusCode::OK,
            Err(e) => {
                debug!("健康检查失败: {}", e);
                false
            }
        }
    }

    /// 发送单条用户消息；所有错误都转换为失败结果
    pub async fn send_message(&self, prompt: &str, options: &MessageOptions) -> ScenarioResult {
        let start = Instant::now();
        match self.try_send_message(prompt, options, start).await {
            Ok(result) => result,
            Err(e) => {
                let elapsed = start.elapsed().as_secs_f64();
                warn!("请求失败 ({:.2}s): {}", elapsed, body_preview(&e.to_string()));
                ScenarioResult::failed(e.to_string(), e.status(), elapsed)
            }
        }
    }

    async fn try_send_message(
        &self,
        prompt: &str,
        options: &MessageOptions,
        start: Instant,
    ) -> Result<ScenarioResult, ClientError> {
        let url = format!("{}{}", self.base_url, MESSAGES_PATH);
        let body = build_request_body(&self.model, prompt, options);

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_ms))?;

        let status = resp.status();
        let is_stream = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains(EVENT_STREAM));
        let text = resp
            .text()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_ms))?;
        let response_time = start.elapsed().as_secs_f64();

        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if is_stream {
            debug!("收到流式响应: {} 字节", text.len());
            let content = parse_stream(&text);
            return Ok(ScenarioResult::succeeded(
                ResponseKind::Stream,
                content,
                response_time,
                Value::String(text),
            ));
        }

        let data: Value = serde_json::from_str(&text).map_err(|e| {
            ClientError::Decode(format!("{} - body: {}", e, body_preview(&text)))
        })?;
        if !data.is_object() {
            return Err(ClientError::Decode(format!(
                "响应不是 JSON 对象 - body: {}",
                body_preview(&text)
            )));
        }
        Ok(ScenarioResult::succeeded(
            ResponseKind::Normal,
            extract_content(&data),
            response_time,
            data,
        ))
    }
}
