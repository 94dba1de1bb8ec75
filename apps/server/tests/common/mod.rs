#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use milkbook_ai::{AssistantTrait, FakeAssistant, DEFAULT_MODEL};
use milkbook_server::{api::app_router, build_state_with_assistant, config::Config};
use rand::{rngs::OsRng, RngCore};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a throwaway database. Keep the `TempDir` alive for the test.
pub async fn build_test_router(assistant: Arc<dyn AssistantTrait>) -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();

    let mut secret_bytes = [0u8; 32];
    OsRng.fill_bytes(&mut secret_bytes);

    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        secret_key: BASE64.encode(secret_bytes),
        access_token_ttl: Duration::from_secs(3600),
        default_daily_cost: dec!(104.00),
        groq_api_key: None,
        assistant_model: DEFAULT_MODEL.to_string(),
    };
    let state = build_state_with_assistant(&config, assistant).await.unwrap();
    (app_router(state, &config), tmp)
}

pub async fn default_router() -> (Router, TempDir) {
    build_test_router(Arc::new(FakeAssistant::echo())).await
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get_json(app: &Router, uri: &str, token: &str) -> Value {
    body_json(send(app, Method::GET, uri, Some(token), None).await).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Registers `username` and returns `(account_id, access_token)`.
pub async fn register_and_login(app: &Router, username: &str, password: &str) -> (String, String) {
    let response = send(
        app,
        Method::POST,
        "/api/v1/auth/register",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status(), 200);
    let account = body_json(response).await;

    let response = send(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(response.status(), 200);
    let login = body_json(response).await;

    (
        account["id"].as_str().unwrap().to_string(),
        login["accessToken"].as_str().unwrap().to_string(),
    )
}
