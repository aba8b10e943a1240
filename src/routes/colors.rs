// SPDX-License-Identifier: MIT

//! Color routes (authenticated).

use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Color, User};
use crate::services::mutations::UploadColorArgs;
use crate::AppState;

/// Color routes (require authentication via bearer token).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/colors", post(upload_color))
        .route("/api/colors/{id}", delete(delete_color))
}

#[derive(Serialize)]
pub struct ColorResponse {
    pub color: Color,
    pub user: User,
}

/// Create a color owned by the caller.
async fn upload_color(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(args): Json<UploadColorArgs>,
) -> Result<Json<ColorResponse>> {
    let (color, user) = state.mutations.upload_color(&auth.user_id, args).await?;
    Ok(Json(ColorResponse { color, user }))
}

/// Delete a color by id. Any authenticated user may delete any color.
async fn delete_color(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<bool>> {
    let deleted = state.mutations.delete_color(&id).await?;
    Ok(Json(deleted))
}
