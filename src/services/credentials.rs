// SPDX-License-Identifier: MIT

//! Credential service: password hashing and bearer-token lifecycle.
//!
//! Owns the two primitives every account operation builds on: bcrypt
//! hash/verify for passwords and HS256 sign/verify for bearer tokens. The
//! signing secret is injected once at construction; nothing here touches
//! the store.

use bcrypt::DEFAULT_COST;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AppError, Result};

/// Token lifetime: one hour from issuance. Expiry is the only way a token
/// dies; there is no revocation list.
pub const TOKEN_TTL_SECS: usize = 60 * 60;

/// Bearer-token claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Email at issuance time
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Password hashing and token signing/verification.
#[derive(Clone)]
pub struct CredentialService {
    secret: Vec<u8>,
}

impl CredentialService {
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Hash a password with a per-call random salt (bcrypt, cost 12).
    ///
    /// Fails only on catastrophic internal error.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns false on mismatch or on a malformed stored hash; never
    /// errors, so callers can treat the result as a plain credential check.
    pub fn verify_password(&self, password: &str, hashed: &str) -> bool {
        bcrypt::verify(password, hashed).unwrap_or(false)
    }

    /// Sign a bearer token for a user. Expires [`TOKEN_TTL_SECS`] from now.
    pub fn issue_token(&self, user_id: &str, email: &str) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("System time error: {}", e)))?
            .as_secs() as usize;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token signing failed: {}", e)))
    }

    /// Verify a bearer token and return its claims.
    ///
    /// Any failure (bad signature, expired, malformed) collapses into
    /// `Unauthenticated`; callers never learn which check tripped.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let key = DecodingKey::from_secret(&self.secret);
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthenticated("Invalid or expired token".to_string()))
    }
}
