// ## 📂 File: `src/envelope/types.rs`

//! envelope/types.rs
//! Container wrapper shape and the envelope error taxonomy.

use serde::Serialize;
use thiserror::Error;

use crate::crypto::{CipherError, PaddingError};

/// Borrowed container used when encoding. Field order is the wire order.
#[derive(Serialize)]
pub struct ContainerRef<'a, P: ?Sized> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub payload: &'a P,
}

/// Envelope failures.
///
/// Every variant except `Serialize` and `Cipher` belongs to the
/// malformed-container family: corrupted, truncated or foreign-keyed input
/// that no retry can fix.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("malformed container: {have} bytes, need at least {need}")]
    TooShort { have: usize, need: usize },

    #[error("malformed container: ciphertext length {len} is not a multiple of {block}")]
    Misaligned { len: usize, block: usize },

    #[error("malformed container: {0}")]
    BadPadding(#[from] PaddingError),

    #[error("malformed container: invalid JSON after decryption: {0}")]
    Json(#[source] serde_json::Error),

    #[error("failed to serialize container: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("cipher failure: {0}")]
    Cipher(#[from] CipherError),
}

impl EnvelopeError {
    /// True for the malformed-container family.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            EnvelopeError::TooShort { .. }
                | EnvelopeError::Misaligned { .. }
                | EnvelopeError::BadPadding(_)
                | EnvelopeError::Json(_)
        )
    }
}
