//! End-to-end tests for the member API, driven through the full router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use kindred::http_server::HttpServer;
use kindred::store::{FamilyStructure, Member};

fn test_router(members: Vec<Member>) -> Router {
    let family = Arc::new(FamilyStructure::with_members("Jackson", members).unwrap());
    HttpServer::new(family).router()
}

fn john() -> Member {
    Member::new(1, "John", 33, vec![7])
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn sitemap_lists_all_endpoints() {
    let router = test_router(vec![john()]);

    let response = router.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["family"], "Jackson");
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn list_members_returns_collection_in_order() {
    let router = test_router(vec![
        Member::new(1, "John", 33, vec![7, 13, 22]),
        Member::new(2, "Jane", 35, vec![10, 14, 3]),
        Member::new(3, "Jimmy", 5, vec![1]),
    ]);

    let response = router.oneshot(get("/members")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["John", "Jane", "Jimmy"]);
}

#[tokio::test]
async fn get_member_returns_record() {
    let router = test_router(vec![john()]);

    let response = router.oneshot(get("/member/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["first_name"], "John");
    assert_eq!(body["age"], 33);
    assert_eq!(body["lucky_numbers"], json!([7]));
}

#[tokio::test]
async fn get_absent_member_returns_not_found() {
    let router = test_router(vec![john()]);

    let response = router.oneshot(get("/member/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["status_code"], 404);
    assert_eq!(body["message"], "Member not found: 99");
}

#[tokio::test]
async fn get_member_with_non_integer_id_is_a_client_error() {
    let router = test_router(vec![john()]);

    let response = router.oneshot(get("/member/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_member_then_list_shows_both_in_order() {
    let router = test_router(vec![john()]);

    let jane = json!({
        "id": 2,
        "first_name": "Jane",
        "age": 35,
        "lucky_numbers": [13]
    });

    let response = router
        .clone()
        .oneshot(post_json("/member", jane))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["msg"], "New member successfully added");
    assert_eq!(body["member"]["id"], 2);
    assert_eq!(body["member"]["first_name"], "Jane");

    let response = router.oneshot(get("/members")).await.unwrap();
    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["John", "Jane"]);
}

#[tokio::test]
async fn post_member_with_missing_field_returns_bad_request() {
    let router = test_router(vec![john()]);

    // no age
    let body = json!({
        "id": 2,
        "first_name": "Jane",
        "lucky_numbers": [13]
    });

    let response = router.oneshot(post_json("/member", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status_code"], 400);
    assert!(body["message"].as_str().unwrap().contains("age"));
}

#[tokio::test]
async fn post_member_with_mistyped_field_returns_bad_request() {
    let router = test_router(vec![john()]);

    let body = json!({
        "id": 2,
        "first_name": "Jane",
        "age": "thirty-five",
        "lucky_numbers": [13]
    });

    let response = router.oneshot(post_json("/member", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_member_with_duplicate_id_returns_conflict() {
    let router = test_router(vec![john()]);

    let body = json!({
        "id": 1,
        "first_name": "Impostor",
        "age": 99,
        "lucky_numbers": []
    });

    let response = router
        .clone()
        .oneshot(post_json("/member", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Collection unchanged
    let response = router.oneshot(get("/members")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_member_then_list_shows_remainder() {
    let router = test_router(vec![john(), Member::new(2, "Jane", 35, vec![13])]);

    let response = router.clone().oneshot(delete("/member/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["done"], true);
    assert_eq!(body["deleted_member"]["id"], 1);
    assert_eq!(body["deleted_member"]["first_name"], "John");

    let response = router.oneshot(get("/members")).await.unwrap();
    let body = body_json(response).await;
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["first_name"], "Jane");
}

#[tokio::test]
async fn delete_absent_member_returns_not_found() {
    let router = test_router(vec![john()]);

    let response = router.clone().oneshot(delete("/member/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Collection unchanged
    let response = router.oneshot(get("/members")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
