// SPDX-License-Identifier: MIT

//! Design routes (authenticated).

use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Design, User};
use crate::services::mutations::UploadDesignArgs;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/designs", post(upload_design))
}

#[derive(Serialize)]
pub struct DesignResponse {
    pub design: Design,
    pub user: User,
}

/// Create a design owned by the caller.
async fn upload_design(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(args): Json<UploadDesignArgs>,
) -> Result<Json<DesignResponse>> {
    let (design, user) = state.mutations.upload_design(&auth.user_id, args).await?;
    Ok(Json(DesignResponse { design, user }))
}
