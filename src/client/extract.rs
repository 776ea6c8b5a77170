//! 非流式响应内容提取

use serde_json::Value;

/// 提取 Messages API 响应中的文本
///
/// `content` 为数组时拼接所有 `type == "text"` 的块（换行分隔）；
/// 否则将 `content` 转为字符串，缺失或为 null 时返回空串。
pub fn extract_content(response: &Value) -> String {
    match response.get("content") {
        Some(Value::Array(blocks)) => blocks
            .iter()
            .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
            .map(|b| b.get("text").and_then(Value::as_str).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
