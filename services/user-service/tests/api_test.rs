use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use user_service::create_app;

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::new(create_app()).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "user-service");
}

#[tokio::test]
async fn test_list_users() {
    let server = TestServer::new(create_app()).unwrap();

    let response = server.get("/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["users"], json!(["Alice", "Bob"]));
    assert_eq!(body["version"], "v2");
}

#[tokio::test]
async fn test_repeated_calls_are_byte_identical() {
    let server = TestServer::new(create_app()).unwrap();

    let first = server.get("/users").await.text();
    let second = server.get("/users").await.text();

    assert_eq!(first, r#"{"users":["Alice","Bob"],"version":"v2"}"#);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = TestServer::new(create_app()).unwrap();

    let response = server.get("/accounts").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_users_is_rejected() {
    let server = TestServer::new(create_app()).unwrap();

    let response = server.delete("/users").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
