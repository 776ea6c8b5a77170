//! Anthropic SSE 文本解析
//!
//! 从 Messages API 的 SSE 响应体中提取文本增量。
//! 逐行过滤：只有 `data: ` 开头、可解析为 JSON、且为 `content_block_delta` + `text_delta`
//! 的行会产生文本，其余行静默跳过。

use serde::Deserialize;
use tracing::trace;

/// SSE 数据行前缀
pub const DATA_PREFIX: &str = "data: ";

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StreamEvent {
    ContentBlockDelta {
        #[serde(default)]
        delta: Option<StreamDelta>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StreamDelta {
    TextDelta {
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

/// 解析单行，返回文本增量
pub fn parse_line(line: &str) -> Option<String> {
    let data = line.trim_end_matches('\r').strip_prefix(DATA_PREFIX)?;

    let event: StreamEvent = match serde_json::from_str(data) {
        Ok(e) => e,
        Err(e) => {
            trace!("[AnthropicSSE] 跳过无法解析的行: {} - data: {}", e, data);
            return None;
        }
    };

    match event {
        StreamEvent::ContentBlockDelta {
            delta: Some(StreamDelta::TextDelta { text }),
        } => Some(text),
        _ => None,
    }
}

/// 惰性迭代响应体中的文本增量（按到达顺序）
pub fn text_deltas(body: &str) -> impl Iterator<Item = String> + '_ {
    body.trim().split('\n').filter_map(parse_line)
}

/// 拼接所有文本增量
pub fn parse_stream(body: &str) -> String {
    text_deltas(body).collect()
}
