// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    #[error("Crypto operation failed: {0}")]
    Crypto(#[from] CryptoFailure),

    #[error("secure random source failed: {0}")]
    Entropy(#[from] rand::rand_core::OsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

impl CoreError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        CoreError::InvalidArgument { name, reason }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument { .. })
    }

    pub fn is_crypto(&self) -> bool {
        matches!(self, CoreError::Crypto(_))
    }
}

/// Why a cipher operation rejected its input
#[derive(Error, Debug)]
pub enum CryptoFailure {
    #[error("malformed base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("key must be {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    #[error("envelope of {actual} bytes is shorter than the {iv_len}-byte IV plus one block")]
    Truncated { actual: usize, iv_len: usize },

    #[error("ciphertext is misaligned or its padding is invalid")]
    Padding,

    #[error("plaintext is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl From<base64::DecodeError> for CoreError {
    fn from(err: base64::DecodeError) -> Self {
        CoreError::Crypto(CryptoFailure::Base64(err))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
