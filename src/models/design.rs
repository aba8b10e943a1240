// SPDX-License-Identifier: MIT

//! Design model.

use serde::{Deserialize, Serialize};

/// A saved design: an ordered palette of color values plus an optional
/// shape. Uploads set only `name` and `colors`; `shape` exists for the
/// read side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// Document id (24 hex chars)
    pub id: String,
    pub name: String,
    /// Ordered color values
    pub colors: Vec<String>,
    #[serde(default)]
    pub shape: Option<String>,
    /// Owning user id; set from the authenticated principal at creation.
    pub user: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}
