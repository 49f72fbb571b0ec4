//! Shared helpers for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use cinema_api::config::{AppConfig, StoreBackend};
use cinema_api::store::{MemoryStore, StoreHolder};
use cinema_api::{AppState, HttpServer};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TOKEN: &str = "test-token";

/// Configuration pointing at the in-memory store.
pub fn memory_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = StoreBackend::Memory;
    config.server.host = "127.0.0.1".into();
    config.server.port = 0;
    config
}

/// Configuration with bearer auth enabled for writes.
pub fn auth_config() -> AppConfig {
    let mut config = memory_config();
    config.auth.enabled = true;
    config.auth.token = Some(TOKEN.into());
    config
}

/// Router and backing store, ready to take requests.
pub fn app(config: AppConfig) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let holder = Arc::new(StoreHolder::with_store(store.clone()));
    let server = HttpServer::new(AppState::new(config, holder));
    (server.router(), store)
}

/// A parsed response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

/// Send one request through the router. `body` is sent as JSON when present.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri, None, None).await
}

/// POST with the test token and return the generated id.
pub async fn create(router: &Router, collection: &str, body: Value) -> String {
    let response = send(
        router,
        Method::POST,
        &format!("/{}", collection),
        Some(body),
        Some(TOKEN),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["id"].as_str().unwrap().to_string()
}
