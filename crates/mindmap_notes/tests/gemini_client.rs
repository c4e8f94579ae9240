use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use mindmap_notes::{
    gemini::{GeminiClient, GeminiError},
    TextGenerator,
};
use serde_json::{json, Value};

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

impl FakeGemini {
    fn replying(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    Path(action): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    fake.requests
        .lock()
        .unwrap()
        .push((action, query.get("key").cloned(), body));
    (
        fake.status,
        [("content-type", "application/json")],
        fake.body.clone(),
    )
        .into_response()
}

async fn serve(fake: FakeGemini) -> String {
    let app = Router::new()
        .route("/v1beta/models/{action}", post(generate_content))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/v1beta")
}

fn client(base_url: String) -> GeminiClient {
    GeminiClient::new("test-key")
        .with_base_url(base_url)
        .with_model("gemini-test")
}

#[tokio::test]
async fn test_generate_returns_first_candidate_text() {
    let reply = json!({
        "candidates": [{
            "content": {"parts": [{"text": "//A\nfoo\n//END"}], "role": "model"},
            "finishReason": "STOP"
        }]
    });
    let fake = FakeGemini::replying(StatusCode::OK, reply.to_string());
    let base = serve(fake.clone()).await;

    let text = client(base).generate("split this").await.unwrap();
    assert_eq!(text, "//A\nfoo\n//END");

    let requests = fake.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (action, key, body) = &requests[0];
    assert_eq!(action, "gemini-test:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));
    assert_eq!(body, &json!({"contents": [{"parts": [{"text": "split this"}]}]}));
}

#[tokio::test]
async fn test_non_success_status_carries_code_and_body() {
    let fake = FakeGemini::replying(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"error":{"code":429,"message":"Resource has been exhausted"}}"#,
    );
    let base = serve(fake).await;

    let err = client(base).generate("prompt").await.unwrap_err();
    match err {
        GeminiError::RequestFailed { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("Resource has been exhausted"));
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let fake = FakeGemini::replying(
        StatusCode::OK,
        json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string(),
    );
    let base = serve(fake).await;

    let err = client(base).generate("prompt").await.unwrap_err();
    assert!(matches!(err, GeminiError::ResponseMalformed(_)), "got {err:?}");
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let fake = FakeGemini::replying(StatusCode::OK, "<html>gateway</html>");
    let base = serve(fake).await;

    let err = client(base).generate("prompt").await.unwrap_err();
    assert!(matches!(err, GeminiError::ResponseMalformed(_)), "got {err:?}");
}

#[tokio::test]
async fn test_transport_failure_does_not_leak_api_key() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = GeminiClient::new("super-secret-key")
        .with_base_url(format!("http://{addr}/v1beta"))
        .generate("hi")
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::Request(_)), "got {err:?}");
    assert!(!err.to_string().contains("super-secret-key"), "got: {err}");
    assert!(!format!("{err:?}").contains("super-secret-key"), "got: {err:?}");
}
