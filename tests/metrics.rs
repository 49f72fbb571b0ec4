//! Prometheus exposition. Lives in its own test binary because the recorder
//! is process-global.

use std::sync::Arc;

use axum::http::StatusCode;
use cinema_api::observability::metrics::init_metrics;
use cinema_api::store::{MemoryStore, StoreHolder};
use cinema_api::{AppState, HttpServer};

mod common;
use common::{create, get, memory_config};

#[tokio::test]
async fn requests_are_counted_by_route_template() {
    let mut config = memory_config();
    config.observability.metrics_enabled = true;
    let holder = Arc::new(StoreHolder::with_store(Arc::new(MemoryStore::new())));
    let state = AppState::new(config, holder).with_metrics(init_metrics().unwrap());
    let router = HttpServer::new(state).router();

    assert_eq!(get(&router, "/actors").await.status, StatusCode::OK);
    let id = create(&router, "actors", serde_json::json!({ "name": "Tom Hanks" })).await;
    assert_eq!(
        get(&router, &format!("/actors/{}", id)).await.status,
        StatusCode::OK
    );

    let response = get(&router, "/metrics").await;
    assert_eq!(response.status, StatusCode::OK);
    let text = response.body.as_str().unwrap();
    assert!(
        text.contains(r#"http_requests_total{method="GET",path="/actors",status="200"} 1"#),
        "{text}"
    );
    assert!(
        text.contains(r#"http_requests_total{method="POST",path="/actors",status="201"} 1"#),
        "{text}"
    );
    assert!(
        text.contains(r#"http_requests_total{method="GET",path="/actors/{id}",status="200"} 1"#),
        "{text}"
    );
    assert!(text.contains("http_request_duration_seconds_bucket"), "{text}");
}
