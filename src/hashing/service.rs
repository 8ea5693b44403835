// src/hashing/service.rs
//! Salted hashing and verification on top of a [`HashPrimitive`]

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use super::primitive::{HashPrimitive, Sha512Hash};
use crate::aliases::SaltedInput;
use crate::config::Config;
use crate::consts::MAX_RANDOM_PASSWORD_LENGTH;
use crate::error::{CoreError, Result};
use crate::random::random_nonzero_bytes;

/// Generates salts and random passwords, hashes salted data and validates
/// candidates against stored digests.
///
/// Holds no state besides the primitive, so one instance can be shared
/// freely between threads.
#[derive(Clone)]
pub struct HashingService {
    primitive: Arc<dyn HashPrimitive>,
}

impl HashingService {
    pub fn new<P: HashPrimitive + 'static>(primitive: P) -> Self {
        Self {
            primitive: Arc::new(primitive),
        }
    }

    /// Build from an optional shared primitive; `None` is rejected
    pub fn with_primitive(primitive: Option<Arc<dyn HashPrimitive>>) -> Result<Self> {
        let primitive =
            primitive.ok_or_else(|| CoreError::invalid("primitive", "cannot be missing"))?;
        Ok(Self { primitive })
    }

    /// Use the primitive selected by `hashing.algorithm`
    pub fn from_config(config: &Config) -> Self {
        Self {
            primitive: config.hashing.algorithm.primitive(),
        }
    }

    pub fn primitive(&self) -> &dyn HashPrimitive {
        self.primitive.as_ref()
    }

    /// A fresh salt of `minimum_salt_length` random bytes, base64 encoded
    ///
    /// Store it next to the digest; it is required again by [`validate`].
    ///
    /// [`validate`]: HashingService::validate
    pub fn generate_salt(&self) -> Result<String> {
        self.default_random_password()
    }

    /// A random password built from at least `minimum_length` random bytes
    ///
    /// The base64 text is never shorter than `minimum_length`.
    pub fn random_password(&self, minimum_length: i64) -> Result<String> {
        if minimum_length <= 0 {
            return Err(CoreError::invalid(
                "minimum_length",
                "must be larger than zero",
            ));
        }
        let len = usize::try_from(minimum_length)
            .ok()
            .filter(|len| *len <= MAX_RANDOM_PASSWORD_LENGTH)
            .ok_or_else(|| CoreError::invalid("minimum_length", "exceeds the 1 MiB maximum"))?;
        let bytes = random_nonzero_bytes(len)?;
        debug!(bytes = len, primitive = self.primitive.name(), "generated random secret");
        Ok(STANDARD.encode(bytes))
    }

    /// [`random_password`](HashingService::random_password) sized by the primitive
    pub fn default_random_password(&self) -> Result<String> {
        let len = i64::try_from(self.primitive.minimum_salt_length())
            .map_err(|_| CoreError::invalid("minimum_salt_length", "exceeds i64"))?;
        self.random_password(len)
    }

    /// Hash `original_data` with `salt` prepended
    ///
    /// The UTF-8 bytes of the salt come first, then the data; the
    /// concatenation is base64 encoded and handed to the primitive. The
    /// primitive's output is returned as is.
    pub fn encrypt(&self, original_data: &str, salt: &str) -> Result<String> {
        let mut buf = Vec::with_capacity(salt.len() + original_data.len());
        buf.extend_from_slice(salt.as_bytes());
        buf.extend_from_slice(original_data.as_bytes());
        let salted = SaltedInput::new(buf);

        self.primitive
            .compute_hash(&STANDARD.encode(salted.expose_secret()))
    }

    /// True iff hashing `original` with `salt` reproduces `digest` exactly
    ///
    /// The comparison runs in constant time over the digest bytes.
    pub fn validate(&self, original: &str, salt: &str, digest: &str) -> Result<bool> {
        let computed = self.encrypt(original, salt)?;
        let matches: bool = computed.as_bytes().ct_eq(digest.as_bytes()).into();
        if !matches {
            warn!(primitive = self.primitive.name(), "digest mismatch");
        }
        Ok(matches)
    }
}

impl Default for HashingService {
    /// SHA-512 backed service
    fn default() -> Self {
        Self::new(Sha512Hash)
    }
}

impl fmt::Debug for HashingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashingService")
            .field("primitive", &self.primitive.name())
            .field("minimum_salt_length", &self.primitive.minimum_salt_length())
            .finish()
    }
}
