//! Application configuration loaded from environment variables.
//!
//! The token signing secret is read once at startup and injected into the
//! credential service; nothing reads it from ambient global state afterwards.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// HS256 signing secret for bearer tokens (raw bytes)
    pub access_token_secret: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `ACCESS_TOKEN_SECRET` is required; `PORT` and `FRONTEND_URL` have
    /// development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            access_token_secret: env::var("ACCESS_TOKEN_SECRET")
                .map_err(|_| ConfigError::Missing("ACCESS_TOKEN_SECRET"))?
                .into_bytes(),
        })
    }

    /// Fixed config for tests; never used in production.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            access_token_secret: b"test_token_secret_32_bytes_long!".to_vec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
