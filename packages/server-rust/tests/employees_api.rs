//! HTTP-level tests for the employee routes, driven through the full router.

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use roster_server::{InMemoryEmployeeStore, NetworkModule, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    NetworkModule::new(
        ServerConfig::default(),
        Arc::new(InMemoryEmployeeStore::seeded()),
    )
    .build_router()
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes)
}

fn json_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn list_returns_seeded_employees_in_order() {
    let router = app();
    let (status, _, body) = send(&router, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_body(&body),
        json!([
            {"id": 1, "name": "John"},
            {"id": 2, "name": "Jane"},
            {"id": 3, "name": "Alice"},
            {"id": 4, "name": "Bob"},
        ])
    );
}

#[tokio::test]
async fn get_known_and_unknown() {
    let router = app();
    let (status, _, body) = send(&router, Method::GET, "/api/employees/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"id": 2, "name": "Jane"}));

    let (status, _, body) = send(&router, Method::GET, "/api/employees/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn create_returns_location_and_is_retrievable() {
    let router = app();
    let (status, headers, body) = send(
        &router,
        Method::POST,
        "/api/employees",
        Some(json!({"id": null, "name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[LOCATION], "/api/employees/5");
    assert_eq!(json_body(&body), json!({"id": 5, "name": "X"}));

    let (status, _, body) = send(&router, Method::GET, "/api/employees/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"id": 5, "name": "X"}));

    let (_, _, body) = send(&router, Method::GET, "/api/employees", None).await;
    assert_eq!(json_body(&body).as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn create_with_blank_name_is_validation_problem() {
    let router = app();
    let (status, headers, body) = send(
        &router,
        Method::POST,
        "/api/employees",
        Some(json!({"name": " "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[CONTENT_TYPE], "application/problem+json");

    let problem = json_body(&body);
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["title"], "Validation Error");
    assert_eq!(problem["type"], "/api/employees/validation-error");
    assert_eq!(
        problem["violations"],
        json!([{"field": "name", "message": "must not be blank"}])
    );

    let (_, _, body) = send(&router, Method::GET, "/api/employees", None).await;
    assert_eq!(json_body(&body).as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn create_with_malformed_body_is_validation_problem() {
    let router = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let problem = json_body(&body);
    assert_eq!(problem["title"], "Validation Error");
    assert_eq!(problem["violations"], json!([]));
}

#[tokio::test]
async fn replace_with_mismatched_id_is_bad_request_problem() {
    let router = app();
    let (status, headers, body) = send(
        &router,
        Method::PUT,
        "/api/employees/2",
        Some(json!({"id": 6, "name": "Y"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[CONTENT_TYPE], "application/problem+json");

    let problem = json_body(&body);
    assert_eq!(problem["title"], "Invalid Employee Data");
    assert_eq!(problem["type"], "/api/employees/bad-request");
    assert!(problem["detail"].as_str().unwrap().contains("does not match"));
    assert!(problem.get("violations").is_none());

    let (_, _, body) = send(&router, Method::GET, "/api/employees/2", None).await;
    assert_eq!(json_body(&body), json!({"id": 2, "name": "Jane"}));
}

#[tokio::test]
async fn replace_known_and_unknown() {
    let router = app();
    let (status, _, body) = send(
        &router,
        Method::PUT,
        "/api/employees/3",
        Some(json!({"id": 3, "name": "Alicia"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({"id": 3, "name": "Alicia"}));

    let (status, _, body) = send(
        &router,
        Method::PUT,
        "/api/employees/99",
        Some(json!({"id": 99, "name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, _, _) = send(&router, Method::GET, "/api/employees/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let router = app();
    let (status, _, body) = send(&router, Method::DELETE, "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _, _) = send(&router, Method::GET, "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = send(&router, Method::DELETE, "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn seeded_scenario_end_to_end() {
    let router = app();

    let (status, _, _) = send(&router, Method::GET, "/api/employees/2", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _, _) = send(&router, Method::GET, "/api/employees/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, headers, _) = send(
        &router,
        Method::POST,
        "/api/employees",
        Some(json!({"id": null, "name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let location = headers[LOCATION].to_str().unwrap().to_string();
    let (status, _, _) = send(&router, Method::GET, &location, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(
        &router,
        Method::PUT,
        &location,
        Some(json!({"id": 6, "name": "Y"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = send(&router, Method::DELETE, &location, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) = send(&router, Method::GET, &location, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_validation_problem() {
    let router = app();
    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, Some(json!({"id": 1, "name": "X"}))),
        (Method::DELETE, None),
    ] {
        let (status, headers, body) = send(&router, method, "/api/employees/abc", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(headers[CONTENT_TYPE], "application/problem+json");

        let problem = json_body(&body);
        assert_eq!(problem["title"], "Validation Error");
        assert_eq!(problem["type"], "/api/employees/validation-error");
        assert_eq!(
            problem["violations"],
            json!([{"field": "id", "message": "must be an integer"}])
        );
    }

    let (_, _, body) = send(&router, Method::GET, "/api/employees", None).await;
    assert_eq!(json_body(&body).as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn create_without_name_is_validation_problem() {
    let router = app();
    let (status, headers, body) = send(
        &router,
        Method::POST,
        "/api/employees",
        Some(json!({"id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[CONTENT_TYPE], "application/problem+json");
    assert_eq!(
        json_body(&body)["violations"],
        json!([{"field": "name", "message": "must not be blank"}])
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let router = app();
    let (_, headers, _) = send(&router, Method::GET, "/api/employees", None).await;
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn health_endpoints_respond() {
    let router = app();
    let (status, _, body) = send(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["employees"], 4);

    let (status, _, _) = send(&router, Method::GET, "/health/live", None).await;
    assert_eq!(status, StatusCode::OK);

    // Not yet serving, so not ready.
    let (status, _, _) = send(&router, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
