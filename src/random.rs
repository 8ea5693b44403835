// src/random.rs
//! Secure random source
//!
//! Thin wrapper over the operating system CSPRNG. Failures of the entropy
//! source are surfaced as [`CoreError::Entropy`] instead of panicking.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{CoreError, Result};

/// Fill `buf` from the OS random source
pub fn fill(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf)?;
    Ok(())
}

/// `len` uniformly random bytes, used for keys and IVs
///
/// Allocation failure is reported as an error rather than aborting.
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| CoreError::invalid("len", "cannot allocate that many random bytes"))?;
    buf.resize(len, 0);
    fill(&mut buf)?;
    Ok(buf)
}

/// `len` random bytes in `1..=255`, used for salts and generated passwords
///
/// Zero bytes are redrawn one at a time, so every byte stays uniform over
/// the non-zero range.
pub fn random_nonzero_bytes(len: usize) -> Result<Vec<u8>> {
    let mut buf = random_bytes(len)?;
    let mut redraw = [0u8; 1];
    for slot in buf.iter_mut() {
        while *slot == 0 {
            fill(&mut redraw)?;
            *slot = redraw[0];
        }
    }
    Ok(buf)
}
