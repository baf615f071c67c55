use super::*;

/// Expected: 400 envelope naming the malformed id
#[tokio::test]
async fn malformed_id_is_bad_request() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/jobs/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"type": "error", "message": "Invalid Job ID 'abc'"}));
}

/// Expected: 400 envelope for a body that is not valid JSON
#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (app, _db) = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/candidats")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Expected: 400 when filtering jobs by a criterion they do not support
#[tokio::test]
async fn unsupported_filter_is_bad_request() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, Method::GET, "/jobs?role=ADMIN", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "error");
}

/// Expected: index lists the six modules, health reports them ok
#[tokio::test]
async fn index_and_health() {
    let (app, _db) = app().await;

    let (status, index) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(index["status"], "running");
    assert_eq!(index["modules"].as_array().unwrap().len(), 6);

    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["modules"]["applications"], "ok");

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/users/{id}"].is_object());
}
