//! Routing and payload checks that are settled before any query runs.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{get, offline_app, post, send};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_and_version_need_no_database() {
    let app = offline_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "campus-registry");
}

#[tokio::test]
async fn ready_reports_unreachable_database() {
    let app = offline_app();
    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unavailable");
}

#[tokio::test]
async fn invalid_building_tip_is_rejected_before_storage() {
    let app = offline_app();
    let (status, body) = post(
        &app,
        "/building/create_building",
        json!({"campus_id": 1, "tip": "Invalid", "floors": 3}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn missing_field_is_a_validation_error() {
    let app = offline_app();
    let (status, body) = post(&app, "/campus/create_campus", json!({"name": "Main"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]["message"].as_str().unwrap().contains("address"));
}

#[tokio::test]
async fn overlong_text_is_a_validation_error() {
    let app = offline_app();
    let (status, body) = post(
        &app,
        "/room/create_room",
        json!({"building_id": 1, "name": "r".repeat(251), "floor": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "validation: name must be at most 250 characters");

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/campus/update_campus/1",
        Some(json!({"address": "a".repeat(300)})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = offline_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/campus/create_campus")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/campus/create_campus")
        .body(Body::from(r#"{"name": "Main", "address": "x"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn non_json_content_type_is_unsupported_media_type() {
    let app = offline_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/campus/create_campus")
        .header("content-type", "text/plain")
        .body(Body::from(r#"{"name": "Main", "address": "x"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "unsupported_media_type");
}

#[tokio::test]
async fn oversized_body_without_content_length_is_payload_too_large() {
    let app = offline_app();
    // send() never sets content-length, so the limit trips while buffering
    let (status, body) = post(
        &app,
        "/campus/create_campus",
        json!({"name": "n".repeat(70 * 1024), "address": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "payload_too_large");
}

#[tokio::test]
async fn oversized_body_with_content_length_is_payload_too_large() {
    let app = offline_app();
    let payload = json!({"name": "n".repeat(70 * 1024), "address": "x"}).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/campus/create_campus")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn non_integer_id_is_a_bad_request() {
    let app = offline_app();
    let (status, body) = get(&app, "/campus/get_campus_by_id/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let app = offline_app();
    let (status, _) = get(&app, "/campus/get_everything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    // delete lives under its own verb path
    let (status, _) = send(&app, Method::DELETE, "/campus/get_campus_by_id/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = offline_app();
    let (status, body) = get(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/room_item/create_room_item"]["post"].is_object());
}
