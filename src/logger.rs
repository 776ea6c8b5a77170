//! 日志模块
//!
//! 初始化 tracing 订阅器，并在记录原始响应前脱敏。
use crate::config::LoggingConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::Level;

/// 日志中保留的原始响应体最大字符数
pub const MAX_BODY_PREVIEW: usize = 512;

static SANITIZE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"Bearer\s+[A-Za-z0-9._-]+", "Bearer ***"),
        (
            r#"x-api-key["']?\s*[:=]\s*["']?[A-Za-z0-9._-]+"#,
            "x-api-key: ***",
        ),
        (
            r#"api[_-]?key["']?\s*[:=]\s*["']?[A-Za-z0-9._-]+"#,
            "api_key: ***",
        ),
        (
            r#"access[_-]?token["']?\s*[:=]\s*["']?[A-Za-z0-9._-]+"#,
            "access_token: ***",
        ),
        (
            r#"refresh[_-]?token["']?\s*[:=]\s*["']?[A-Za-z0-9._-]+"#,
            "refresh_token: ***",
        ),
        (r#"token["']?\s*[:=]\s*["']?[A-Za-z0-9._-]+"#, "token: ***"),
        (
            r#"client[_-]?secret["']?\s*[:=]\s*["']?[A-Za-z0-9._-]+"#,
            "client_secret: ***",
        ),
        (r#"password["']?\s*[:=]\s*["']?[^\s"',}]+"#, "password: ***"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// 安装全局 fmt 订阅器；重复调用或已有订阅器时返回 false
pub fn init(config: &LoggingConfig) -> bool {
    if !config.enabled {
        return false;
    }
    tracing_subscriber::fmt()
        .with_max_level(parse_level(&config.level))
        .with_target(false)
        .try_init()
        .is_ok()
}

pub fn sanitize_log_message(message: &str) -> String {
    let mut sanitized = message.to_string();
    for (re, replacement) in SANITIZE_PATTERNS.iter() {
        sanitized = re.replace_all(&sanitized, *replacement).to_string();
    }
    sanitized
}

/// 脱敏并截断响应体，用于日志输出
pub fn body_preview(body: &str) -> String {
    let sanitized = sanitize_log_message(body);
    if sanitized.chars().count() <= MAX_BODY_PREVIEW {
        return sanitized;
    }
    let mut preview: String = sanitized.chars().take(MAX_BODY_PREVIEW).collect();
    preview.push_str("...");
    preview
}
