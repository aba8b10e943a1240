// SPDX-License-Identifier: MIT

//! Sign-up and sign-in flow tests.
//!
//! These run against the full router, so they cover argument parsing, the
//! mutation service, and the error responses together.

use axum::http::StatusCode;
use hueboard::db::Store;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_sign_up_returns_user_and_token() {
    let (app, state) = common::create_test_app();

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signup",
        None,
        &json!({
            "username": "ana",
            "givenName": "Ana",
            "familyName": "Lopez",
            "email": "a@x.com",
            "password": "p1",
            "confirmPassword": "p1",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "ana");
    assert_eq!(body["user"]["givenName"], "Ana");
    assert_eq!(body["user"]["email"], "a@x.com");
    // The stored hash must never appear in a response.
    assert!(body["user"].get("password").is_none());

    // The token is verifiable and names the created user.
    let token = body["token"].as_str().unwrap();
    let claims = state.credentials.verify_token(token).unwrap();
    assert_eq!(claims.sub, body["user"]["id"].as_str().unwrap());
    assert_eq!(claims.email, "a@x.com");
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let (app, state) = common::create_test_app();
    common::sign_up(&app, "ana", "a@x.com").await;

    let stored = state
        .store
        .find_user_by_email("a@x.com")
        .await
        .unwrap()
        .unwrap();

    assert_ne!(stored.password, "p1");
    assert!(stored.password.starts_with("$2"));
    assert!(state.credentials.verify_password("p1", &stored.password));
}

#[tokio::test]
async fn test_sign_up_duplicate_email_inserts_nothing() {
    let (app, state) = common::create_test_app();
    common::sign_up(&app, "ana", "a@x.com").await;

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signup",
        None,
        &json!({
            "username": "bob",
            "givenName": "Bob",
            "familyName": "Prins",
            "email": "a@x.com",
            "password": "p1",
            "confirmPassword": "p1",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], "Email is already registered");

    // Rejection must not leave a partial record behind.
    assert!(state
        .store
        .find_user_by_username("bob")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_sign_up_duplicate_username_rejected() {
    let (app, _state) = common::create_test_app();
    common::sign_up(&app, "ana", "a@x.com").await;

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signup",
        None,
        &json!({
            "username": "ana",
            "givenName": "Ana",
            "familyName": "Lopez",
            "email": "b@x.com",
            "password": "p1",
            "confirmPassword": "p1",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "Username is taken");
}

#[tokio::test]
async fn test_sign_up_email_collision_outranks_username() {
    let (app, _state) = common::create_test_app();
    common::sign_up(&app, "ana", "a@x.com").await;

    // Both identifiers collide; the email message is the one reported.
    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signup",
        None,
        &json!({
            "username": "ana",
            "givenName": "Ana",
            "familyName": "Lopez",
            "email": "a@x.com",
            "password": "p1",
            "confirmPassword": "p1",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], "Email is already registered");
}

#[tokio::test]
async fn test_sign_up_password_mismatch_rejected() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signup",
        None,
        &json!({
            "username": "ana",
            "givenName": "Ana",
            "familyName": "Lopez",
            "email": "a@x.com",
            "password": "p1",
            "confirmPassword": "p2",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], "Passwords do not match");
}

#[tokio::test]
async fn test_sign_up_missing_field_is_client_error() {
    let (app, _state) = common::create_test_app();

    let (status, _body) = common::send_json(
        &app,
        "POST",
        "/auth/signup",
        None,
        &json!({"username": "ana"}),
    )
    .await;

    // Rejected by the JSON extractor before our handler runs.
    assert!(status.is_client_error(), "got {status}");
}

#[tokio::test]
async fn test_sign_in_round_trip() {
    let (app, state) = common::create_test_app();
    let (user_id, _) = common::sign_up(&app, "ana", "a@x.com").await;

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signin",
        None,
        &json!({"email": "a@x.com", "password": "p1"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "ana");
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert!(body["user"].get("password").is_none());

    let claims = state
        .credentials
        .verify_token(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, user_id);
}

#[tokio::test]
async fn test_sign_in_wrong_password_unauthenticated() {
    let (app, _state) = common::create_test_app();
    common::sign_up(&app, "ana", "a@x.com").await;

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signin",
        None,
        &json!({"email": "a@x.com", "password": "nope"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthenticated");
    assert_eq!(body["details"], "Invalid credentials");
}

#[tokio::test]
async fn test_sign_in_unknown_email_not_found() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::send_json(
        &app,
        "POST",
        "/auth/signin",
        None,
        &json!({"email": "ghost@x.com", "password": "p1"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["details"], "User not found");
}
