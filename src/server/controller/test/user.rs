use super::*;
use sea_orm::EntityTrait;

/// Tests that emails are stored lower-cased and looked up without regard to case.
///
/// Expected: 201 then the same user from `?email=` in another case, 409 on a case variant
#[tokio::test]
async fn email_is_case_insensitive() {
    let (app, _db) = app().await;

    let (status, created) = send(&app, Method::POST, "/users", Some(user_body("A@X.com"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "a@x.com");
    assert!(created.get("passwordHash").is_none());

    let (status, found) = send(&app, Method::GET, "/users?email=a@x.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], created["id"]);

    let (status, body) = send(&app, Method::POST, "/users", Some(user_body("a@X.COM"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User with email 'a@x.com' already exists");
}

/// Tests the soft-delete lifecycle over HTTP.
///
/// Expected: success envelope, then 404, while the row keeps its deletion timestamp
#[tokio::test]
async fn deleted_user_is_hidden_but_kept() {
    let (app, db) = app().await;

    let (_, created) = send(&app, Method::POST, "/users", Some(user_body("gone@x.com"))).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/users/{}", id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"type": "success", "message": "User deleted successfully"}));

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let stored = entity::prelude::User::find_by_id(id as i32)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.deleted_at.is_some());

    let (status, _) = send(&app, Method::POST, "/users", Some(user_body("gone@x.com"))).await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Expected: a case-only email change is a no-op (204)
#[tokio::test]
async fn case_only_email_patch_is_no_content() {
    let (app, _db) = app().await;

    let (_, created) = send(&app, Method::POST, "/users", Some(user_body("ada@x.com"))).await;
    let uri = format!("/users/{}", created["id"]);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({"email": "ADA@x.com"}))).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

/// Expected: suspend and activate flip the status and return the user
#[tokio::test]
async fn suspend_and_activate() {
    let (app, _db) = app().await;

    let (_, created) = send(&app, Method::POST, "/users", Some(user_body("s@x.com"))).await;
    assert_eq!(created["status"], "active");

    let (status, body) = send(&app, Method::PATCH, &format!("/users/{}/suspend", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "suspended");

    let (status, body) = send(&app, Method::GET, "/users?status=suspended", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    let (status, body) = send(&app, Method::PATCH, &format!("/users/{}/activate", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");

    let (status, _) = send(&app, Method::PATCH, "/users/999/suspend", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: skip/limit page through the newest-first list
#[tokio::test]
async fn lists_with_pagination() {
    let (app, _db) = app().await;

    for n in 0..3 {
        send(&app, Method::POST, "/users", Some(user_body(&format!("u{}@x.com", n)))).await;
    }

    let (status, body) = send(&app, Method::GET, "/users?skip=1&limit=1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
}

/// Tests offsets beyond the signed 64-bit range.
///
/// Expected: an empty page instead of a dropped connection
#[tokio::test]
async fn oversized_skip_returns_empty_page() {
    let (app, _db) = app().await;

    send(&app, Method::POST, "/users", Some(user_body("a@x.com"))).await;

    for uri in [
        "/users?skip=9223372036854775807",
        "/users?skip=9223372036854775808",
        "/users?skip=18446744073709551615",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["results"], json!([]));
    }
}
