// SPDX-License-Identifier: MIT

//! Resource mutation service: the authenticated write path.
//!
//! Every operation here is one mutation of the public API. Handlers
//! authenticate the caller first (see [`crate::middleware::auth`]) and pass
//! the resulting user id in; sign-up and sign-in are the two exceptions and
//! establish identity themselves.
//!
//! Ownership model: resources record the creating user, but delete and
//! update are gated on "is a valid principal" only. Any signed-in user can
//! delete or update any resource by id. This matches the product's current
//! contract; tightening it to owner-only is a breaking change.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::db::{self, store, Store};
use crate::error::{AppError, Result};
use crate::models::{Color, Comment, Design, Post, User};
use crate::services::accounts::AccountDirectory;
use crate::services::credentials::CredentialService;

/// An authenticated session: the account plus a fresh bearer token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpArgs {
    pub username: String,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInArgs {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadColorArgs {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadDesignArgs {
    pub name: String,
    pub colors: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPostArgs {
    pub message: String,
    pub selected_file: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostArgs {
    pub message: String,
    pub selected_file: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentPostArgs {
    pub comment: String,
}

/// The write path over accounts, colors, designs, and posts.
#[derive(Clone)]
pub struct MutationService {
    store: Arc<dyn Store>,
    accounts: AccountDirectory,
    credentials: CredentialService,
}

impl MutationService {
    pub fn new(
        store: Arc<dyn Store>,
        accounts: AccountDirectory,
        credentials: CredentialService,
    ) -> Self {
        Self {
            store,
            accounts,
            credentials,
        }
    }

    /// Load the acting user behind an authorized request.
    ///
    /// The token outlives the account by up to its TTL, so a valid token can
    /// name a user the store no longer has.
    async fn acting_user(&self, user_id: &str) -> Result<User> {
        self.accounts
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Register a new account and open a session for it.
    pub async fn sign_up(&self, args: SignUpArgs) -> Result<AuthSession> {
        let email_registered = self.accounts.find_by_email(&args.email).await?;
        let taken_username = self.accounts.find_by_username(&args.username).await?;

        // Email collision is reported even when the username collides too.
        if email_registered.is_some() || taken_username.is_some() {
            let message = if email_registered.is_some() {
                store::EMAIL_TAKEN
            } else {
                store::USERNAME_TAKEN
            };
            return Err(AppError::Validation(message.to_string()));
        }
        if args.password != args.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let user = User {
            id: db::new_object_id()?,
            username: args.username,
            given_name: args.given_name,
            family_name: args.family_name,
            email: args.email,
            password: self.credentials.hash_password(&args.password)?,
        };
        // The store re-checks the unique index under its own lock, so two
        // racing sign-ups for the same email or username cannot both land.
        self.accounts.create(&user).await?;

        let token = self.credentials.issue_token(&user.id, &user.email)?;
        tracing::info!(user_id = %user.id, "Account registered");

        Ok(AuthSession { user, token })
    }

    /// Authenticate by email and password, returning a fresh session.
    pub async fn sign_in(&self, args: SignInArgs) -> Result<AuthSession> {
        let user = self
            .accounts
            .find_by_email(&args.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !self.credentials.verify_password(&args.password, &user.password) {
            return Err(AppError::Unauthenticated("Invalid credentials".to_string()));
        }

        let token = self.credentials.issue_token(&user.id, &user.email)?;
        tracing::info!(user_id = %user.id, "Signed in");

        Ok(AuthSession { user, token })
    }

    pub async fn upload_color(
        &self,
        user_id: &str,
        args: UploadColorArgs,
    ) -> Result<(Color, User)> {
        let user = self.acting_user(user_id).await?;

        let color = Color {
            id: db::new_object_id()?,
            name: args.name,
            value: args.value,
            user: user.id.clone(),
            created_at: Utc::now().to_rfc3339(),
        };
        self.store.insert_color(&color).await?;
        tracing::info!(user_id = %user.id, color_id = %color.id, "Color uploaded");

        Ok((color, user))
    }

    /// Delete a color by id.
    ///
    /// Always reports success: deleting a color that does not exist is a
    /// no-op, not an error.
    pub async fn delete_color(&self, id: &str) -> Result<bool> {
        let existed = self.store.delete_color(id).await?;
        tracing::info!(color_id = %id, existed, "Color deleted");
        Ok(true)
    }

    pub async fn upload_design(
        &self,
        user_id: &str,
        args: UploadDesignArgs,
    ) -> Result<(Design, User)> {
        let user = self.acting_user(user_id).await?;

        let design = Design {
            id: db::new_object_id()?,
            name: args.name,
            colors: args.colors,
            shape: None,
            user: user.id.clone(),
            created_at: Utc::now().to_rfc3339(),
        };
        self.store.insert_design(&design).await?;
        tracing::info!(user_id = %user.id, design_id = %design.id, "Design uploaded");

        Ok((design, user))
    }

    pub async fn upload_post(&self, user_id: &str, args: UploadPostArgs) -> Result<(Post, User)> {
        let user = self.acting_user(user_id).await?;

        let post = Post {
            id: db::new_object_id()?,
            message: args.message,
            selected_file: args.selected_file,
            user: user.id.clone(),
            created_at: Utc::now().to_rfc3339(),
            likes: Vec::new(),
            comments: Vec::new(),
        };
        self.store.insert_post(&post).await?;
        tracing::info!(user_id = %user.id, post_id = %post.id, "Post uploaded");

        Ok((post, user))
    }

    /// Overwrite a post's message and file.
    ///
    /// The stored owner becomes the caller, whoever owned the post before.
    /// Likes, comments, and the creation timestamp carry over unchanged.
    pub async fn update_post(
        &self,
        user_id: &str,
        id: &str,
        args: UpdatePostArgs,
    ) -> Result<(Post, User)> {
        let user = self.acting_user(user_id).await?;

        if !db::is_valid_id(id) {
            return Err(AppError::InvalidArgument(format!("No post with id: {}", id)));
        }
        let existing = self
            .store
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No post with id: {}", id)))?;

        let post = Post {
            id: id.to_string(),
            message: args.message,
            selected_file: args.selected_file,
            user: user.id.clone(),
            created_at: existing.created_at,
            likes: existing.likes,
            comments: existing.comments,
        };
        let updated = self
            .store
            .update_post(id, &post)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No post with id: {}", id)))?;
        tracing::info!(user_id = %user.id, post_id = %id, "Post updated");

        Ok((updated, user))
    }

    /// Delete a post by id. Requires a well-formed id; beyond that the
    /// delete is unconditional and always reports success.
    pub async fn delete_post(&self, id: &str) -> Result<bool> {
        if !db::is_valid_id(id) {
            return Err(AppError::InvalidArgument(format!("No post with id: {}", id)));
        }
        let existed = self.store.delete_post(id).await?;
        tracing::info!(post_id = %id, existed, "Post deleted");
        Ok(true)
    }

    /// Toggle the caller's like on a post.
    ///
    /// Load-toggle-store without a compare-and-swap: two concurrent toggles
    /// on the same post are last-write-wins and one can be lost.
    pub async fn like_post(&self, user_id: &str, id: &str) -> Result<(Post, User)> {
        let user = self.acting_user(user_id).await?;

        let mut post = self
            .store
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No post with the id: {}", id)))?;

        match post.likes.iter().position(|liker| liker == &user.id) {
            Some(_) => post.likes.retain(|liker| liker != &user.id),
            None => post.likes.push(user.id.clone()),
        }

        let updated = self
            .store
            .update_post(id, &post)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No post with the id: {}", id)))?;
        tracing::info!(
            user_id = %user.id,
            post_id = %id,
            likes = updated.likes.len(),
            "Like toggled"
        );

        Ok((updated, user))
    }

    /// Append a comment under the caller's username.
    ///
    /// Unlike its siblings this returns the post alone, without the acting
    /// user. Response-shape asymmetry is part of the public contract.
    pub async fn comment_post(
        &self,
        user_id: &str,
        id: &str,
        args: CommentPostArgs,
    ) -> Result<Post> {
        let user = self.acting_user(user_id).await?;

        if !db::is_valid_id(id) {
            return Err(AppError::InvalidArgument(format!("No post with id: {}", id)));
        }
        let mut post = self
            .store
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No post with id: {}", id)))?;

        post.comments.push(Comment {
            username: user.username,
            text: args.comment,
        });

        let updated = self
            .store
            .update_post(id, &post)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No post with id: {}", id)))?;
        tracing::info!(user_id = %user.id, post_id = %id, "Comment added");

        Ok(updated)
    }
}
