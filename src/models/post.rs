// SPDX-License-Identifier: MIT

//! Post model with likes and comments.

use serde::{Deserialize, Serialize};

/// A shared post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Document id (24 hex chars)
    pub id: String,
    pub message: String,
    /// Attached image as an opaque string (typically a data URL)
    pub selected_file: String,
    /// Owning user id; set from the authenticated principal at creation.
    pub user: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// User ids that liked this post. Set semantics: each id appears at
    /// most once; order carries no meaning.
    #[serde(default)]
    pub likes: Vec<String>,
    /// Append-only; insertion order is the display order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A single comment, stamped with the commenter's username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub username: String,
    pub text: String,
}
