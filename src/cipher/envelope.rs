// src/cipher/envelope.rs
//! Byte framing of encrypted strings: `IV ‖ ciphertext`, base64 as a whole

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CryptoFailure, Result};

/// Decode base64 text, skipping ASCII whitespace such as line wrapping
pub(crate) fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

/// A decoded envelope split at the IV boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    bytes: Vec<u8>,
    iv_len: usize,
}

impl Envelope {
    /// Frame `iv` and `ciphertext` and encode them as base64 text
    pub fn seal(iv: &[u8], ciphertext: &[u8]) -> String {
        let mut bytes = Vec::with_capacity(iv.len() + ciphertext.len());
        bytes.extend_from_slice(iv);
        bytes.extend_from_slice(ciphertext);
        STANDARD.encode(bytes)
    }

    /// Decode base64 `text` whose first `iv_len` bytes are the IV
    ///
    /// Whitespace inside `text` is ignored. The ciphertext must hold at least one whole block of `block_len`
    /// bytes and be block aligned.
    pub fn open(text: &str, iv_len: usize, block_len: usize) -> Result<Self> {
        let bytes = decode_base64(text)?;
        if bytes.len() < iv_len + block_len {
            return Err(CryptoFailure::Truncated {
                actual: bytes.len(),
                iv_len,
            }
            .into());
        }
        if (bytes.len() - iv_len) % block_len != 0 {
            return Err(CryptoFailure::Padding.into());
        }
        Ok(Self { bytes, iv_len })
    }

    pub fn iv(&self) -> &[u8] {
        &self.bytes[..self.iv_len]
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.bytes[self.iv_len..]
    }
}
