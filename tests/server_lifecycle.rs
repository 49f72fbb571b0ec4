//! End-to-end: a real listener, a real client, graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use cinema_api::store::{MemoryStore, StoreHolder};
use cinema_api::{AppState, HttpServer, Shutdown};
use serde_json::{json, Value};
use tokio::net::TcpListener;

mod common;
use common::{auth_config, TOKEN};

#[tokio::test]
async fn serves_over_tcp_and_stops_on_shutdown() {
    let holder = Arc::new(StoreHolder::with_store(Arc::new(MemoryStore::new())));
    let server = HttpServer::new(AppState::new(auth_config(), holder));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let shutdown = Shutdown::new();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let client = reqwest::Client::new();
    let created: Value = client
        .post(format!("{}/actors", base))
        .bearer_auth(TOKEN)
        .json(&json!({ "name": "Tom Hanks", "age": 65 }))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap();

    let response = client
        .get(format!("{}/actors/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let actor: Value = response.json().await.unwrap();
    assert_eq!(actor["name"], "Tom Hanks");
    assert_eq!(actor["age"], 65);

    let rejected = client
        .delete(format!("{}/actors/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), reqwest::StatusCode::UNAUTHORIZED);

    assert_eq!(shutdown.trigger(), 1);
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn unreachable_mongodb_is_fatal_at_startup() {
    let mut config = common::memory_config();
    config.database.backend = cinema_api::config::StoreBackend::Mongodb;
    config.database.uri = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200".into();
    config.database.connect_timeout_secs = 1;

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        cinema_api::lifecycle::prepare(config),
    )
    .await
    .expect("startup hung");
    assert!(matches!(
        result,
        Err(cinema_api::lifecycle::StartupError::Store(_))
    ));
}

#[tokio::test]
async fn prepare_writes_openapi_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docs").join("swagger-output.json");
    let mut config = common::memory_config();
    config.docs.output_path = Some(path.clone());

    let server = cinema_api::lifecycle::prepare(config).await.unwrap();
    assert!(server.state().store.is_initialized());

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["info"]["title"], "Cinema API");
    assert!(written["paths"]["/movies/{id}"].is_object());
}
