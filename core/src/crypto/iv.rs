// ## 📂 File: `src/crypto/iv.rs`

//! crypto/iv.rs
//! Initialization vector generation for the CBC envelope.
//!
//! Security notes:
//! - The key is fixed by the format, so the IV is the only per-file
//!   randomness. It must come from the OS CSPRNG on every call.
//! - Never cache or reuse an IV across containers.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::{CipherError, IV_LEN_16};

/// Draw a fresh 16-byte IV from the operating system RNG.
#[inline]
pub fn generate_iv() -> Result<[u8; IV_LEN_16], CipherError> {
    let mut iv = [0u8; IV_LEN_16];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CipherError::Entropy(e.to_string()))?;
    Ok(iv)
}
