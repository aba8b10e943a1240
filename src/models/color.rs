// SPDX-License-Identifier: MIT

//! Color model.

use serde::{Deserialize, Serialize};

/// A saved color swatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// Document id (24 hex chars)
    pub id: String,
    /// Display name, e.g. "Teal"
    pub name: String,
    /// Color value, e.g. "#008080"
    pub value: String,
    /// Owning user id; set from the authenticated principal at creation,
    /// never from client input.
    pub user: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}
