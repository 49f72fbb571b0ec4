//! CRUD behaviour of the `/actors` resource.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{app, create, get, memory_config, send, TOKEN};

#[tokio::test]
async fn create_then_get_round_trips() {
    let (router, _) = app(memory_config());
    let submitted = json!({
        "name": "Tom Hanks",
        "age": 65,
        "country": "USA",
        "movies": ["Forrest Gump"]
    });

    let id = create(&router, "actors", submitted.clone()).await;
    assert_eq!(id.len(), 24);

    let response = get(&router, &format!("/actors/{}", id)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_id"], id);
    for field in ["name", "age", "country", "movies"] {
        assert_eq!(response.body[field], submitted[field], "field {field}");
    }
}

#[tokio::test]
async fn list_returns_every_actor() {
    let (router, _) = app(memory_config());
    assert_eq!(get(&router, "/actors").await.body, json!([]));

    create(&router, "actors", json!({ "name": "Tom Hanks" })).await;
    create(&router, "actors", json!({ "name": "Meryl Streep" })).await;

    let response = get(&router, "/actors").await;
    assert_eq!(response.status, StatusCode::OK);
    let mut names: Vec<_> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["Meryl Streep", "Tom Hanks"]);
}

#[tokio::test]
async fn create_without_name_is_rejected_and_not_stored() {
    let (router, store) = app(memory_config());

    for body in [json!({ "age": 40 }), json!({ "name": "" }), json!({ "name": null })] {
        let response = send(&router, Method::POST, "/actors", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "Actor name is required");
    }
    assert!(store.is_empty("actors"));
}

#[tokio::test]
async fn unknown_fields_are_stripped() {
    let (router, _) = app(memory_config());
    let id = create(
        &router,
        "actors",
        json!({ "name": "Keanu Reeves", "isAdmin": true, "_id": "ffffffffffffffffffffffff" }),
    )
    .await;

    let body = get(&router, &format!("/actors/{}", id)).await.body;
    assert_eq!(body, json!({ "_id": id, "name": "Keanu Reeves" }));
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let (router, store) = app(memory_config());

    let response = send(
        &router,
        Method::POST,
        "/actors",
        Some(json!({ "name": "Tom", "age": "sixty" })),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON data"));

    let response = send(&router, Method::POST, "/actors", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty("actors"));
}

#[tokio::test]
async fn update_replaces_whole_document() {
    let (router, _) = app(memory_config());
    let id = create(
        &router,
        "actors",
        json!({ "name": "Tom Hanks", "age": 65, "country": "USA" }),
    )
    .await;

    let response = send(
        &router,
        Method::PUT,
        &format!("/actors/{}", id),
        Some(json!({ "name": "Thomas Hanks", "movies": ["Big"] })),
        Some(TOKEN),
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, serde_json::Value::Null);

    let body = get(&router, &format!("/actors/{}", id)).await.body;
    assert_eq!(
        body,
        json!({ "_id": id, "name": "Thomas Hanks", "movies": ["Big"] })
    );
}

#[tokio::test]
async fn update_with_identical_body_still_succeeds() {
    let (router, _) = app(memory_config());
    let body = json!({ "name": "Tom Hanks" });
    let id = create(&router, "actors", body.clone()).await;

    let response = send(&router, Method::PUT, &format!("/actors/{}", id), Some(body), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn update_of_missing_actor_is_not_found() {
    let (router, store) = app(memory_config());
    let id = create(&router, "actors", json!({ "name": "Tom Hanks" })).await;
    let missing = "65a1f0c2e4b0a1b2c3d4e5f6";
    assert_ne!(id, missing);

    let response = send(
        &router,
        Method::PUT,
        &format!("/actors/{}", missing),
        Some(json!({ "name": "Nobody" })),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Actor not found");

    assert_eq!(store.len("actors"), 1);
    let body = get(&router, &format!("/actors/{}", id)).await.body;
    assert_eq!(body["name"], "Tom Hanks");
}

#[tokio::test]
async fn update_requires_name() {
    let (router, _) = app(memory_config());
    let id = create(&router, "actors", json!({ "name": "Tom Hanks" })).await;

    let response = send(
        &router,
        Method::PUT,
        &format!("/actors/{}", id),
        Some(json!({ "age": 70 })),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(get(&router, &format!("/actors/{}", id)).await.body["name"], "Tom Hanks");
}

#[tokio::test]
async fn delete_twice_is_ok_then_not_found() {
    let (router, store) = app(memory_config());
    let id = create(&router, "actors", json!({ "name": "Tom Hanks" })).await;
    let uri = format!("/actors/{}", id);

    let first = send(&router, Method::DELETE, &uri, None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, json!({ "message": "Actor deleted" }));
    assert!(store.is_empty("actors"));

    let second = send(&router, Method::DELETE, &uri, None, None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    assert_eq!(get(&router, &uri).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_bad_requests_everywhere() {
    let (router, _) = app(memory_config());
    let uri = "/actors/not-an-id";

    let response = get(&router, uri).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid ID");

    let put = send(&router, Method::PUT, uri, Some(json!({ "name": "x" })), None).await;
    assert_eq!(put.status, StatusCode::BAD_REQUEST);

    let delete = send(&router, Method::DELETE, uri, None, None).await;
    assert_eq!(delete.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let mut config = memory_config();
    config.security.max_body_size = 64;
    let (router, store) = app(config);
    let body = json!({ "name": "x".repeat(200) });

    let response = send(&router, Method::POST, "/actors", Some(body.clone()), None).await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["error"], "Request body too large");

    let encoded = body.to_string();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/actors")
        .header("content-type", "application/json")
        .header("content-length", encoded.len())
        .body(axum::body::Body::from(encoded))
        .unwrap();
    let response = tower::ServiceExt::oneshot(router, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    assert!(store.is_empty("actors"));
}

#[tokio::test]
async fn loosely_typed_stored_actors_are_still_served() {
    use cinema_api::store::DocumentStore;
    use mongodb::bson::doc;

    let (router, store) = app(memory_config());
    create(&router, "actors", json!({ "name": "Tom Hanks", "age": 65 })).await;
    let legacy = store
        .insert(
            "actors",
            doc! { "name": "Legacy", "age": 65.0_f64, "country": 1, "movies": ["Big", 7] },
        )
        .await
        .unwrap();

    let response = get(&router, "/actors").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = get(&router, &format!("/actors/{}", legacy.to_hex())).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "_id": legacy.to_hex(),
            "name": "Legacy",
            "age": 65,
            "country": "1",
            "movies": ["Big", "7"]
        })
    );
}
