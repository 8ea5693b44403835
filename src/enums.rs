// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible algorithm choices that can be
//! selected from the config file.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::hashing::{HashPrimitive, Sha256Hash, Sha512Hash};

/// Supported password hashing primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum HashAlgorithm {
    #[default]
    Sha512,
    Sha256,
}

impl HashAlgorithm {
    /// Build the primitive implementing this algorithm
    pub fn primitive(self) -> Arc<dyn HashPrimitive> {
        match self {
            HashAlgorithm::Sha512 => Arc::new(Sha512Hash),
            HashAlgorithm::Sha256 => Arc::new(Sha256Hash),
        }
    }
}

/// Supported string encryption ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum CipherAlgorithm {
    #[default]
    #[serde(rename = "aes256-cbc")]
    Aes256Cbc,
    // Future:
    // Aes256Gcm,
}
