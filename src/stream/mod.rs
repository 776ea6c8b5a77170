//! 流式响应解析模块

mod anthropic_sse;

pub use anthropic_sse::{parse_line, parse_stream, text_deltas, DATA_PREFIX};
