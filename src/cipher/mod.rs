// src/cipher/mod.rs
//! Symmetric string encryption
//!
//! Strings are encrypted with a block cipher in CBC mode with PKCS7 padding.
//! Each call draws a fresh IV and returns it in front of the ciphertext, so
//! an envelope is self-contained given the key. IV and key sizes come from
//! the cipher type rather than fixed constants.

mod envelope;

use std::fmt;
use std::marker::PhantomData;

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{
    BlockCipher, BlockDecryptMut, BlockEncryptMut, BlockSizeUser, KeyInit, KeyIvInit, KeySizeUser,
};
use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

pub use envelope::Envelope;

use envelope::decode_base64;

use crate::aliases::{KeyMaterial, PlainText};
use crate::error::{CoreError, CryptoFailure, Result};
use crate::random::random_bytes;

/// AES-256-CBC, the cipher behind the module level helpers
pub type Aes256CbcService = SymmetricCipherService<Aes256>;

/// Encrypts and decrypts strings under a base64 key
///
/// Stateless; the type parameter only selects the block cipher.
pub struct SymmetricCipherService<C = Aes256> {
    cipher: PhantomData<fn() -> C>,
}

fn require_text(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid(name, "cannot be empty or whitespace"));
    }
    Ok(())
}

impl<C> SymmetricCipherService<C>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit,
{
    pub fn new() -> Self {
        Self {
            cipher: PhantomData,
        }
    }

    /// Raw key length in bytes
    pub fn key_len() -> usize {
        <C as KeySizeUser>::key_size()
    }

    /// IV length in bytes; one cipher block
    pub fn iv_len() -> usize {
        <C as BlockSizeUser>::block_size()
    }

    /// A fresh random key, base64 encoded
    pub fn generate_cipher_key(&self) -> Result<String> {
        let key = KeyMaterial::new(random_bytes(Self::key_len())?);
        debug!(bytes = Self::key_len(), "generated cipher key");
        Ok(STANDARD.encode(key.expose_secret()))
    }

    fn decode_key(&self, key: &str) -> Result<KeyMaterial> {
        let key = KeyMaterial::new(decode_base64(key)?);
        let actual = key.expose_secret().len();
        if actual != Self::key_len() {
            return Err(CryptoFailure::KeyLength {
                expected: Self::key_len(),
                actual,
            }
            .into());
        }
        Ok(key)
    }

    /// Encrypt `plaintext` under `key` and return base64(IV ‖ ciphertext)
    pub fn encrypt_string(&self, plaintext: &str, key: &str) -> Result<String> {
        require_text("plaintext", plaintext)?;
        require_text("key", key)?;

        let key = self.decode_key(key)?;
        let iv = random_bytes(Self::iv_len())?;
        let ciphertext = cbc::Encryptor::<C>::new_from_slices(key.expose_secret(), &iv)
            .map_err(|_| CryptoFailure::KeyLength {
                expected: Self::key_len(),
                actual: key.expose_secret().len(),
            })?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        debug!(
            plaintext_bytes = plaintext.len(),
            ciphertext_bytes = ciphertext.len(),
            "sealed envelope"
        );
        Ok(Envelope::seal(&iv, &ciphertext))
    }

    /// Reverse [`encrypt_string`](SymmetricCipherService::encrypt_string)
    pub fn decrypt_string(&self, envelope: &str, key: &str) -> Result<String> {
        require_text("envelope", envelope)?;
        require_text("key", key)?;

        let key = self.decode_key(key)?;
        let envelope = Envelope::open(envelope, Self::iv_len(), Self::iv_len())?;
        let decryptor = cbc::Decryptor::<C>::new_from_slices(key.expose_secret(), envelope.iv())
            .map_err(|_| CryptoFailure::KeyLength {
                expected: Self::key_len(),
                actual: key.expose_secret().len(),
            })?;
        let plaintext = PlainText::new(
            decryptor
                .decrypt_padded_vec_mut::<Pkcs7>(envelope.ciphertext())
                .map_err(|_| {
                    warn!("envelope failed to unpad; wrong key or corrupted ciphertext");
                    CryptoFailure::Padding
                })?,
        );

        let text = std::str::from_utf8(plaintext.expose_secret()).map_err(CryptoFailure::from)?;
        Ok(text.to_owned())
    }
}

impl<C> Default for SymmetricCipherService<C>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for SymmetricCipherService<C> {
    fn clone(&self) -> Self {
        Self {
            cipher: PhantomData,
        }
    }
}

impl<C> fmt::Debug for SymmetricCipherService<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricCipherService")
            .field("cipher", &std::any::type_name::<C>())
            .finish()
    }
}

/// Generate a 32-byte AES-256 key, base64 encoded
pub fn generate_cipher_key() -> Result<String> {
    Aes256CbcService::new().generate_cipher_key()
}

/// Encrypt with AES-256-CBC under an explicit base64 key
pub fn encrypt_string(plaintext: &str, key: &str) -> Result<String> {
    Aes256CbcService::new().encrypt_string(plaintext, key)
}

/// Decrypt an AES-256-CBC envelope under an explicit base64 key
pub fn decrypt_string(envelope: &str, key: &str) -> Result<String> {
    Aes256CbcService::new().decrypt_string(envelope, key)
}
