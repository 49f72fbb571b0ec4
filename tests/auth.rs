//! Bearer token gate on mutating routes.

use axum::http::{header, Method, StatusCode};
use serde_json::json;

mod common;
use common::{app, auth_config, create, get, memory_config, send, TOKEN};

#[tokio::test]
async fn writes_without_token_are_rejected_and_not_applied() {
    let (router, store) = app(auth_config());

    let response = send(
        &router,
        Method::POST,
        "/actors",
        Some(json!({ "name": "Tom Hanks" })),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Missing bearer token");
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    assert!(store.is_empty("actors"));
}

#[tokio::test]
async fn wrong_token_is_rejected() {
    let (router, store) = app(auth_config());

    let response = send(
        &router,
        Method::POST,
        "/movies",
        Some(json!({ "title": "Heat" })),
        Some("not-the-token"),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid bearer token");
    assert!(store.is_empty("movies"));
}

#[tokio::test]
async fn update_and_delete_are_guarded() {
    let (router, _) = app(auth_config());
    let id = create(&router, "actors", json!({ "name": "Tom Hanks" })).await;
    let uri = format!("/actors/{}", id);

    let put = send(&router, Method::PUT, &uri, Some(json!({ "name": "X" })), None).await;
    assert_eq!(put.status, StatusCode::UNAUTHORIZED);
    let delete = send(&router, Method::DELETE, &uri, None, Some("wrong")).await;
    assert_eq!(delete.status, StatusCode::UNAUTHORIZED);

    let body = get(&router, &uri).await.body;
    assert_eq!(body["name"], "Tom Hanks");

    let delete = send(&router, Method::DELETE, &uri, None, Some(TOKEN)).await;
    assert_eq!(delete.status, StatusCode::OK);
}

#[tokio::test]
async fn auth_is_checked_before_the_id() {
    let (router, _) = app(auth_config());
    let response = send(&router, Method::DELETE, "/movies/not-an-id", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reads_stay_public() {
    let (router, _) = app(auth_config());
    let id = create(&router, "movies", json!({ "title": "Heat" })).await;

    assert_eq!(get(&router, "/movies").await.status, StatusCode::OK);
    assert_eq!(
        get(&router, &format!("/movies/{}", id)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn disabled_auth_lets_writes_through() {
    let (router, store) = app(memory_config());
    let response = send(
        &router,
        Method::POST,
        "/actors",
        Some(json!({ "name": "Tom Hanks" })),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(store.len("actors"), 1);
}
