// src/hashing/primitive.rs
//! Pluggable hash primitives
//!
//! A primitive turns text into a base64 digest and advertises how long a
//! salt should be to match its output strength.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256, Sha512};

use crate::consts::{SHA256_MINIMUM_SALT_LENGTH, SHA512_MINIMUM_SALT_LENGTH};
use crate::error::{CoreError, Result};

/// A one-way hash used by [`HashingService`](super::HashingService)
///
/// Implementations must be deterministic: the same input always yields the
/// same digest string.
pub trait HashPrimitive: Send + Sync {
    /// Hash `data` and return the digest as text
    fn compute_hash(&self, data: &str) -> Result<String>;

    /// Recommended salt size in bytes for this primitive
    fn minimum_salt_length(&self) -> usize;

    /// Short name used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

fn base64_digest<D: Digest>(data: &str) -> Result<String> {
    if data.is_empty() {
        return Err(CoreError::invalid("data", "cannot be empty"));
    }
    Ok(STANDARD.encode(D::digest(data.as_bytes())))
}

/// SHA-512 over the UTF-8 bytes of the input, base64 encoded
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Hash;

impl HashPrimitive for Sha512Hash {
    fn compute_hash(&self, data: &str) -> Result<String> {
        base64_digest::<Sha512>(data)
    }

    fn minimum_salt_length(&self) -> usize {
        SHA512_MINIMUM_SALT_LENGTH
    }

    fn name(&self) -> &'static str {
        "sha512"
    }
}

/// SHA-256 over the UTF-8 bytes of the input, base64 encoded
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash;

impl HashPrimitive for Sha256Hash {
    fn compute_hash(&self, data: &str) -> Result<String> {
        base64_digest::<Sha256>(data)
    }

    fn minimum_salt_length(&self) -> usize {
        SHA256_MINIMUM_SALT_LENGTH
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}
