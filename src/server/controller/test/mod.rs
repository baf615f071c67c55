//! Handler tests driving the full router against an in-memory database.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod envelope;
mod user;

/// Router over a migrated database, plus the connection for direct storage checks.
async fn app() -> (Router, sea_orm::DatabaseConnection) {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.clone().unwrap();

    (router().with_state(AppState::new(db.clone())), db)
}

/// Sends one request and returns the status with the decoded JSON body, if any.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn user_body(email: &str) -> Value {
    json!({
        "fullName": "Ada Lovelace",
        "email": email,
        "passwordHash": "hash",
        "role": "CANDIDAT",
        "phone": "+33100000000"
    })
}
