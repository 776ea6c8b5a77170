//! 测试用的中继桩服务
//!
//! 根据用户消息内容返回不同响应：
//! - `fail`：500
//! - `garbage`：200 + 非 JSON 文本
//! - `array`：200 + 顶层为数组的 JSON
//! - `slow`：3 秒后才响应
//! - 其他：`stream: true` 时返回 SSE，否则返回 JSON，文本为 `echo: {prompt}`

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn sse_frame(event: &str, data: Value) -> String {
    format!("event: {event}\ndata: {data}\n\n")
}

async fn messages(Json(body): Json<Value>) -> Response {
    let prompt = body["messages"][0]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let stream = body["stream"].as_bool().unwrap_or(false);
    let tool_count = body["tools"].as_array().map(Vec::len).unwrap_or(0);

    match prompt.as_str() {
        "fail" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "garbage" => (StatusCode::OK, "not json at all").into_response(),
        "array" => Json(json!([1, 2])).into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"content": [{"type": "text", "text": "too late"}]})).into_response()
        }
        _ if stream => {
            let mut sse = sse_frame(
                "message_start",
                json!({"type": "message_start", "message": {"id": "msg_stub", "model": body["model"]}}),
            );
            sse.push_str("data: {malformed\n\n");
            for part in ["echo: ", prompt.as_str()] {
                sse.push_str(&sse_frame(
                    "content_block_delta",
                    json!({"type": "content_block_delta", "index": 0, "delta": {"type": "text_delta", "text": part}}),
                ));
            }
            sse.push_str(&sse_frame("message_stop", json!({"type": "message_stop"})));
            ([(header::CONTENT_TYPE, "text/event-stream")], sse).into_response()
        }
        _ => Json(json!({
            "id": "msg_stub",
            "type": "message",
            "role": "assistant",
            "model": body["model"],
            "content": [
                {"type": "text", "text": format!("echo: {prompt}")},
                {"type": "text", "text": format!("tools: {tool_count}")}
            ]
        }))
        .into_response(),
    }
}

pub async fn spawn_stub_relay() -> TestServer {
    let router = Router::new()
        .route("/v1/health", get(|| async { StatusCode::OK }))
        .route("/v1/messages", post(messages));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = rx.await;
            })
            .await;
    });

    TestServer {
        addr,
        shutdown: Some(tx),
    }
}

/// 返回一个当前无人监听的本地地址
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
