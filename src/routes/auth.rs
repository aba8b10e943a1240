// SPDX-License-Identifier: MIT

//! Sign-up and sign-in routes.
//!
//! The only two routes that do not sit behind the auth middleware. Both
//! return the account together with a fresh one-hour bearer token.

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::User;
use crate::services::mutations::{SignInArgs, SignUpArgs};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in))
}

/// Session response: the account plus its bearer token.
#[derive(Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Register a new account.
async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(args): Json<SignUpArgs>,
) -> Result<Json<AuthResponse>> {
    let session = state.mutations.sign_up(args).await?;
    Ok(Json(AuthResponse {
        user: session.user,
        token: session.token,
    }))
}

/// Sign in with email and password.
async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(args): Json<SignInArgs>,
) -> Result<Json<AuthResponse>> {
    let session = state.mutations.sign_in(args).await?;
    Ok(Json(AuthResponse {
        user: session.user,
        token: session.token,
    }))
}
