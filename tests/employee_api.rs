use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use employee_hal::common::HAL_JSON;
use employee_hal::prelude::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn empty_app() -> Router {
    employee_hal::app::router(Arc::new(InMemoryEmployeeRepository::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_advertises_exactly_two_links() {
    let app = empty_app();
    let (status, headers, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), HAL_JSON);
    assert_eq!(
        body,
        json!({
            "_links": {
                "self": { "href": "/" },
                "employees": { "href": "/employees" },
            }
        })
    );
}

#[tokio::test]
async fn test_root_is_independent_of_repository_state() {
    let app = empty_app();
    let (_, _, before) = send(&app, get("/")).await;
    send(
        &app,
        post_json("/employees", json!({ "name": "Sam", "role": "gardener" })),
    )
    .await;
    let (_, _, after) = send(&app, get("/")).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_empty_collection_still_has_self_link() {
    let app = empty_app();
    let (status, _, body) = send(&app, get("/employees")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("_embedded").is_none());
    assert_eq!(body["_links"]["self"]["href"], "/employees");
}

#[tokio::test]
async fn test_post_then_follow_location() {
    let app = empty_app();
    let payload = json!({ "name": "Samwise Gamgee", "role": "gardener" });

    let (status, headers, created) = send(&app, post_json("/employees", payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let location = headers
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/employees/1");
    assert_eq!(created["_links"]["self"]["href"], location.as_str());

    let (status, _, fetched) = send(&app, get(&location)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["id"], 1);
    assert_eq!(fetched["name"], "Samwise Gamgee");
    assert_eq!(fetched["role"], "gardener");
    assert_eq!(fetched["_links"]["employees"]["href"], "/employees");
}

#[tokio::test]
async fn test_posted_id_is_ignored() {
    let app = empty_app();
    let payload = json!({ "id": 77, "name": "Merry", "role": "esquire" });

    let (status, headers, body) = send(&app, post_json("/employees", payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/employees/1");
    assert_eq!(body["id"], 1);

    let (status, _, _) = send(&app, get("/employees/77")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_posted_id_is_ignored() {
    let app = empty_app();
    for (n, id) in [json!(-1), json!("x")].into_iter().enumerate() {
        let payload = json!({ "id": id, "name": "Sam", "role": "gardener" });

        let (status, headers, body) = send(&app, post_json("/employees", payload)).await;
        let expected = format!("/employees/{}", n + 1);
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(headers.get(header::LOCATION).unwrap(), expected.as_str());
        assert_eq!(body["id"], n + 1);
        assert_eq!(body["name"], "Sam");
    }
}

#[tokio::test]
async fn test_missing_employee_reports_id() {
    let app = empty_app();
    let (status, _, body) = send(&app, get("/employees/42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert_eq!(body["message"], "No employee '42' found");
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let app = empty_app();
    let response = app.clone().oneshot(get("/employees/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_payload_is_rejected() {
    let app = empty_app();
    let response = app
        .clone()
        .oneshot(post_json("/employees", json!({ "name": "no role" })))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let (_, _, body) = send(&app, get("/employees")).await;
    assert!(body.get("_embedded").is_none());
}

#[tokio::test]
async fn test_repeated_get_is_identical() {
    let app = empty_app();
    send(
        &app,
        post_json("/employees", json!({ "name": "Pippin", "role": "guard" })),
    )
    .await;

    let (_, _, first) = send(&app, get("/employees/1")).await;
    let (_, _, second) = send(&app, get("/employees/1")).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_collection_embeds_linked_employees() {
    let config = AppConfig::default();
    let app = Application::bootstrap(&config).await.unwrap().router();

    let (status, _, body) = send(&app, get("/employees")).await;
    assert_eq!(status, StatusCode::OK);

    let employees = body["_embedded"]["employees"].as_array().unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0]["name"], "Frodo Baggins");
    assert_eq!(employees[0]["role"], "ring bearer");
    assert_eq!(employees[0]["_links"]["self"]["href"], "/employees/1");
    assert_eq!(employees[1]["name"], "Bilbo Baggins");
    assert_eq!(employees[1]["_links"]["self"]["href"], "/employees/2");
    assert_eq!(body["_links"]["self"]["href"], "/employees");
}

#[tokio::test]
async fn test_unknown_method_is_not_allowed() {
    let app = empty_app();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/employees/1")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
