// SPDX-License-Identifier: MIT

//! Bearer-token authentication middleware.
//!
//! The gate for every mutation except sign-up and sign-in. Verifies the
//! `Authorization: Bearer` token against the process-wide signing secret and
//! hands the verified identity to handlers as a request extension. Does not
//! touch the store; a token can outlive its account (see
//! [`crate::services::MutationService`]).

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated principal extracted from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

/// Middleware that requires a valid bearer token.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => {
            return Err(AppError::Unauthenticated(
                "Missing bearer token".to_string(),
            ))
        }
    };

    let claims = state.credentials.verify_token(token)?;

    let auth_user = AuthUser {
        user_id: claims.sub,
        email: claims.email,
    };
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
