// src/lib.rs
//! krypt-rs: salted password hashing and symmetric string encryption
//!
//! Features:
//! - Salt-prepend-then-hash digests over a pluggable primitive (SHA-512 default)
//! - Constant-time digest validation
//! - AES-256-CBC string envelopes (`IV ‖ ciphertext`, base64)
//! - secure-gate wrappers that zeroize key material and decrypted text

pub mod aliases;
pub mod cipher;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod hashing;
pub mod random;

// Re-export everything users need at the crate root
pub use cipher::{
    decrypt_string, encrypt_string, generate_cipher_key, Aes256CbcService, Envelope,
    SymmetricCipherService,
};
pub use config::load as load_config;
pub use enums::{CipherAlgorithm, HashAlgorithm};
pub use error::{CoreError, CryptoFailure, Result as CoreResult};
pub use hashing::{HashPrimitive, HashingService, Sha256Hash, Sha512Hash};
