// SPDX-License-Identifier: MIT

//! The Store trait that persistence backends implement.
//!
//! The mutation core treats persistence as an abstract document store with
//! typed per-collection operations. Backends are free to map these onto any
//! engine; the crate ships [`crate::db::MemoryStore`] as the reference
//! implementation.

use crate::error::Result;
use crate::models::{Color, Design, Post, User};

/// Unique-index violation message for a taken email address.
pub const EMAIL_TAKEN: &str = "Email is already registered";
/// Unique-index violation message for a taken username.
pub const USERNAME_TAKEN: &str = "Username is taken";

/// The storage seam the mutation services depend on.
///
/// Callers construct full records (including a fresh id from
/// [`crate::db::new_object_id`]); the store persists them as given.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    // ─── User Operations ─────────────────────────────────────────

    /// Find a user by exact email match.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find a user by exact username match.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Get a user by id.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Insert a new user record.
    ///
    /// Enforces the unique email/username index atomically and fails with
    /// `Validation(`[`EMAIL_TAKEN`]`)` or `Validation(`[`USERNAME_TAKEN`]`)`
    /// on a collision, so two concurrent sign-ups for the same identity
    /// cannot both land.
    async fn insert_user(&self, user: &User) -> Result<()>;

    // ─── Color Operations ────────────────────────────────────────

    /// Insert a new color record.
    async fn insert_color(&self, color: &Color) -> Result<()>;

    /// Delete a color by id. Returns whether a record existed.
    async fn delete_color(&self, id: &str) -> Result<bool>;

    // ─── Design Operations ───────────────────────────────────────

    /// Insert a new design record.
    async fn insert_design(&self, design: &Design) -> Result<()>;

    // ─── Post Operations ─────────────────────────────────────────

    /// Insert a new post record.
    async fn insert_post(&self, post: &Post) -> Result<()>;

    /// Get a post by id.
    async fn get_post(&self, id: &str) -> Result<Option<Post>>;

    /// Replace an existing post by id, returning the stored record, or
    /// `None` (store untouched) when no post has that id.
    async fn update_post(&self, id: &str, post: &Post) -> Result<Option<Post>>;

    /// Delete a post by id. Returns whether a record existed.
    async fn delete_post(&self, id: &str) -> Result<bool>;
}
