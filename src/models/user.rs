//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// Identity record created at sign-up and attached (read-only) to every
/// authorized mutation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document id (24 hex chars)
    pub id: String,
    /// Unique handle
    pub username: String,
    /// First name
    pub given_name: String,
    /// Last name
    pub family_name: String,
    /// Unique email address
    pub email: String,
    /// bcrypt hash; the plaintext is discarded at sign-up and the hash
    /// never serializes into a response.
    #[serde(skip_serializing, default)]
    pub password: String,
}
