// Rust guideline compliant 2026-10-12

//! Project ID generation for the file-backed store.
//!
//! IDs have the form `prj-XXXXXX` where `XXXXXX` is the first six hex
//! characters of a SHA-256 digest over title, timestamp and a nonce. IDs
//! coming from other document stores are treated as opaque.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Prefix for locally generated project IDs.
pub const ID_PREFIX: &str = "prj-";

const HASH_LEN: usize = 6;

/// Generates a project ID.
///
/// # Arguments
///
/// * `title` - Project title
/// * `timestamp` - Unix timestamp of creation
/// * `nonce` - Collision counter, incremented by the caller on clashes
pub fn generate_id(title: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}{}", ID_PREFIX, &hex[..HASH_LEN])
}

/// Generates an ID that does not collide with any of `existing`.
pub fn generate_unique_id<'a, I>(title: &str, timestamp: i64, existing: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(title, timestamp, nonce);
        if !existing.clone().into_iter().any(|taken| taken == id) {
            return id;
        }
        nonce = nonce.saturating_add(1);
    }
}

/// Validates the format of a locally generated ID.
///
/// # Errors
///
/// Returns an error if the prefix or hash part is malformed.
pub fn validate_id_format(id: &str) -> Result<()> {
    let hash = id
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| Error::InvalidProject(format!("ID must start with '{}': {}", ID_PREFIX, id)))?;

    if hash.len() != HASH_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()) {
        return Err(Error::InvalidProject(format!(
            "ID must have {} lowercase hex characters after the prefix: {}",
            HASH_LEN, id
        )));
    }

    Ok(())
}
