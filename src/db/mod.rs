//! Database layer: the Store seam and its in-memory reference backend.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::Store;

use crate::error::AppError;
use ring::rand::{SecureRandom, SystemRandom};

/// Raw length of a generated identifier before hex encoding.
const OBJECT_ID_BYTES: usize = 12;

/// Generate a fresh document identifier: 12 random bytes, hex-encoded.
pub fn new_object_id() -> Result<String, AppError> {
    let mut bytes = [0u8; OBJECT_ID_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG failure")))?;
    Ok(hex::encode(bytes))
}

/// Whether `id` is a well-formed document identifier (24 hex characters).
///
/// Malformed ids are rejected before any store access so a bad delete or
/// update never mutates anything.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == 2 * OBJECT_ID_BYTES && id.bytes().all(|b| b.is_ascii_hexdigit())
}
