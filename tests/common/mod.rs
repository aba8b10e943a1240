// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use hueboard::config::Config;
use hueboard::db::{MemoryStore, Store};
use hueboard::routes::create_router;
use hueboard::services::{AccountDirectory, CredentialService, MutationService};
use hueboard::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app over a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let config = Config::test_default();
    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());

    let credentials = CredentialService::new(config.access_token_secret.clone());
    let accounts = AccountDirectory::new(store.clone());
    let mutations = MutationService::new(store.clone(), accounts, credentials.clone());

    let state = Arc::new(AppState {
        config,
        store,
        credentials,
        mutations,
    });

    (create_router(state.clone()), state)
}

/// Send a JSON request, optionally with a bearer token.
/// Returns the status and the parsed response body.
#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    payload: &Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = builder.body(Body::from(payload.to_string())).unwrap();

    read_response(app, request).await
}

/// Send a bodyless request, optionally with a bearer token.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = builder.body(Body::empty()).unwrap();

    read_response(app, request).await
}

async fn read_response(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Register an account and return its (user id, bearer token).
#[allow(dead_code)]
pub async fn sign_up(app: &Router, username: &str, email: &str) -> (String, String) {
    let (status, body) = send_json(
        app,
        "POST",
        "/auth/signup",
        None,
        &json!({
            "username": username,
            "givenName": "Test",
            "familyName": "User",
            "email": email,
            "password": "p1",
            "confirmPassword": "p1",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign-up failed: {body}");

    (
        body["user"]["id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

/// Create a post as the given user and return its id.
#[allow(dead_code)]
pub async fn upload_post(app: &Router, token: &str, message: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/api/posts",
        Some(token),
        &json!({"message": message, "selectedFile": ""}),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "post upload failed: {body}");

    body["post"]["id"].as_str().unwrap().to_string()
}
