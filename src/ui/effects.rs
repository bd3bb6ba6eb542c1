//! 副作用：执行分析请求并把结果变成 reducer 事件

use chrono::Local;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use super::actions::Event;
use crate::client::AnalysisClient;

/// 执行一次请求，失败在这里被捕获，不再向外传播
pub async fn perform_analysis(client: &AnalysisClient, note: &str) -> Event {
    let request_id = Uuid::new_v4();

    async {
        match client.analyze(note).await {
            Ok(response) => {
                info!(label = ?response.sentiment_label, "analysis succeeded");
                Event::SubmitSucceeded {
                    response,
                    received_at: Local::now(),
                }
            }
            Err(failure) => {
                warn!(error = %failure, "analysis failed");
                Event::SubmitFailed(failure)
            }
        }
    }
    .instrument(info_span!("analyze", %request_id))
    .await
}

/// 在后台执行请求，完成后把事件送回主循环
pub fn spawn_analysis(client: AnalysisClient, note: String, tx: UnboundedSender<Event>) {
    tokio::spawn(async move {
        let event = perform_analysis(&client, &note).await;
        // 主循环已退出时丢弃结果
        let _ = tx.send(event);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;
    use crate::ui::actions::{Action, Flow};
    use crate::ui::state::App;
    use axum::{Json, Router, routing::post};
    use serde_json::json;
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    async fn spawn_server() -> String {
        let app = Router::new().route(
            "/api/analyze",
            post(|| async {
                Json(json!({
                    "analysis": "It is a sentence carrying a negative vibe.\nCompound Score: -0.52",
                    "sentiment_label": "neg"
                }))
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/api/analyze")
    }

    #[tokio::test]
    async fn test_spawned_request_settles_state() {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = AnalysisClient::with_http(http, spawn_server().await);

        let mut app = App::new();
        for c in "rainy monday".chars() {
            app.dispatch(Action::Input(c));
        }
        let Flow::Analyze(note) = app.dispatch(Action::Submit) else {
            panic!("submit should start a request");
        };
        assert!(app.state.is_loading);

        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_analysis(client, note, tx);
        let event = rx.recv().await.unwrap();
        assert!(app.state.is_loading);

        app.apply(event);
        assert!(!app.state.is_loading);
        assert_eq!(app.state.label, SentimentLabel::Neg);
        assert_eq!(app.state.title, "Negative");
        assert_eq!(
            app.state.result.as_ref().unwrap().message,
            "It is a sentence carrying a negative vibe."
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_becomes_failure_event() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = AnalysisClient::with_http(http, format!("http://{addr}/api/analyze"));

        let event = perform_analysis(&client, "hello").await;
        assert!(matches!(event, Event::SubmitFailed(_)));
    }
}
