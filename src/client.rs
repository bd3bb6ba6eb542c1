//! 情感分析接口客户端
//!
//! 一次请求，不重试，不设超时

use tracing::{debug, warn};

use crate::error::RequestFailure;
use crate::models::{AnalyzeRequest, AnalyzeResponse, ErrorBody};

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), endpoint)
    }

    pub fn with_http(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 发送句子并返回后端的分析结果
    pub async fn analyze(&self, note: &str) -> Result<AnalyzeResponse, RequestFailure> {
        let request = AnalyzeRequest {
            note: note.to_string(),
        };

        debug!(endpoint = %self.endpoint, chars = note.chars().count(), "posting note");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // 错误体可能不是 JSON，解析失败时当作没有错误信息
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            warn!(%status, message = ?message, "analysis endpoint rejected note");
            return Err(RequestFailure::Status { status, message });
        }

        serde_json::from_slice::<AnalyzeResponse>(&body)
            .map_err(|e| RequestFailure::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio::sync::{Mutex, oneshot};

    async fn spawn_server(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/api/analyze")
    }

    fn client(endpoint: String) -> AnalysisClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        AnalysisClient::with_http(http, endpoint)
    }

    #[tokio::test]
    async fn test_posts_note_and_decodes_success() {
        let (tx, rx) = oneshot::channel::<Value>();
        let tx = Arc::new(Mutex::new(Some(tx)));

        let app = Router::new().route(
            "/api/analyze",
            post(move |Json(body): Json<Value>| {
                let tx = tx.clone();
                async move {
                    if let Some(tx) = tx.lock().await.take() {
                        let _ = tx.send(body);
                    }
                    Json(json!({
                        "analysis": "Great!\nCompound Score: 0.66",
                        "sentiment_label": "pos"
                    }))
                }
            }),
        );
        let endpoint = spawn_server(app).await;

        let response = client(endpoint).analyze("  what a day ").await.unwrap();
        assert_eq!(response.analysis, "Great!\nCompound Score: 0.66");
        assert_eq!(response.sentiment_label.as_deref(), Some("pos"));

        // 原样发送，不做 trim
        let sent = rx.await.unwrap();
        assert_eq!(sent, json!({ "note": "  what a day " }));
    }

    #[tokio::test]
    async fn test_error_body_is_surfaced() {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Bad input" })),
                )
            }),
        );
        let endpoint = spawn_server(app).await;

        let failure = client(endpoint).analyze("x").await.unwrap_err();
        match &failure {
            RequestFailure::Status { status, message } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(message.as_deref(), Some("Bad input"));
            }
            other => panic!("unexpected failure: {other:?}"),
        }
        assert_eq!(failure.user_message(), "Bad input");
    }

    #[tokio::test]
    async fn test_error_without_body_uses_fallback() {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let endpoint = spawn_server(app).await;

        let failure = client(endpoint).analyze("x").await.unwrap_err();
        assert!(matches!(
            failure,
            RequestFailure::Status { message: None, .. }
        ));
        assert_eq!(failure.user_message(), crate::error::FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_success_is_failure() {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async { Json(json!({ "sentiment_label": "pos" })) }),
        );
        let endpoint = spawn_server(app).await;

        let failure = client(endpoint).analyze("x").await.unwrap_err();
        assert!(matches!(failure, RequestFailure::Decode(_)));
    }

    #[tokio::test]
    async fn test_non_string_label_still_decodes() {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async { Json(json!({ "analysis": "Hi", "sentiment_label": 1 })) }),
        );
        let endpoint = spawn_server(app).await;

        let response = client(endpoint).analyze("x").await.unwrap();
        assert_eq!(response.analysis, "Hi");
        assert_eq!(response.sentiment_label.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_failure() {
        // 绑定后立即释放端口，保证无人监听
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let failure = client(format!("http://{addr}/api/analyze"))
            .analyze("x")
            .await
            .unwrap_err();
        assert!(matches!(failure, RequestFailure::Transport(_)));
        assert_eq!(failure.user_message(), crate::error::FALLBACK_ERROR);
    }
}
