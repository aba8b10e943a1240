// SPDX-License-Identifier: MIT

//! Post routes (authenticated).
//!
//! Posts carry the social surface: likes toggle on and off, comments append
//! in order. Note the response shapes: every route returns `{post, user}`
//! except the comment route, which returns the post alone.

use axum::{
    extract::{Path, State},
    routing::{post, put},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Post, User};
use crate::services::mutations::{CommentPostArgs, UpdatePostArgs, UploadPostArgs};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", post(upload_post))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        .route("/api/posts/{id}/like", post(like_post))
        .route("/api/posts/{id}/comments", post(comment_post))
}

#[derive(Serialize)]
pub struct PostResponse {
    pub post: Post,
    pub user: User,
}

/// Create a post owned by the caller, with no likes or comments yet.
async fn upload_post(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(args): Json<UploadPostArgs>,
) -> Result<Json<PostResponse>> {
    let (post, user) = state.mutations.upload_post(&auth.user_id, args).await?;
    Ok(Json(PostResponse { post, user }))
}

/// Overwrite a post's message and file; ownership moves to the caller.
async fn update_post(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(args): Json<UpdatePostArgs>,
) -> Result<Json<PostResponse>> {
    let (post, user) = state.mutations.update_post(&auth.user_id, &id, args).await?;
    Ok(Json(PostResponse { post, user }))
}

/// Delete a post by id. Any authenticated user may delete any post.
async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<bool>> {
    let deleted = state.mutations.delete_post(&id).await?;
    Ok(Json(deleted))
}

/// Toggle the caller's like on a post.
async fn like_post(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>> {
    let (post, user) = state.mutations.like_post(&auth.user_id, &id).await?;
    Ok(Json(PostResponse { post, user }))
}

/// Append a comment; returns the updated post without a user wrapper.
async fn comment_post(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(args): Json<CommentPostArgs>,
) -> Result<Json<Post>> {
    let post = state.mutations.comment_post(&auth.user_id, &id, args).await?;
    Ok(Json(post))
}
