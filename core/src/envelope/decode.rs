// ## 📂 File: `src/envelope/decode.rs`
//! src/envelope/decode.rs
//!
//! Container decoding.
//!
//! Design notes:
//! - Structural checks (length, alignment, padding, JSON) fail with a
//!   malformed-container error and never yield a partial payload.
//! - The container must be a JSON object; arrays and scalars are malformed.
//! - A container without a payload field decodes to `P::default()`.
//! - The `type` field is not enforced; a foreign tag is only logged.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::constants::{BLOCK_LEN, CONTAINER_KEY, CONTAINER_TYPE, IV_LEN};
use crate::crypto::{cbc_decrypt, unpad_pkcs7, PaddingError};
use crate::envelope::types::EnvelopeError;
use crate::utils::fmt_bytes;

/// Split off the IV, decrypt and strip padding.
///
/// # Returns
/// The container JSON bytes.
///
/// # Errors
/// - `TooShort` if `blob` is shorter than one IV.
/// - `Misaligned` if the ciphertext is not whole blocks.
/// - `BadPadding` if the ciphertext is empty or the pad length is invalid.
pub fn open(blob: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    if blob.len() < IV_LEN {
        return Err(EnvelopeError::TooShort { have: blob.len(), need: IV_LEN });
    }

    let (iv, ciphertext) = blob.split_at(IV_LEN);
    if ciphertext.is_empty() {
        return Err(EnvelopeError::BadPadding(PaddingError::Empty));
    }
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(EnvelopeError::Misaligned { len: ciphertext.len(), block: BLOCK_LEN });
    }

    let padded = cbc_decrypt(&CONTAINER_KEY, iv, ciphertext)?;
    let plaintext = unpad_pkcs7(&padded, BLOCK_LEN)?;

    debug!(
        ciphertext_len = ciphertext.len(),
        plaintext_len = plaintext.len(),
        "container opened"
    );
    Ok(plaintext.to_vec())
}

/// Parse container JSON and return its payload.
///
/// The container must be a JSON object. A missing or `null` payload
/// reads as `P::default()`.
pub fn parse_container<P>(json: &[u8]) -> Result<P, EnvelopeError>
where
    P: DeserializeOwned + Default,
{
    let mut container: Map<String, Value> = serde_json::from_slice(json).map_err(|e| {
        trace!(head = %fmt_bytes(&json[..json.len().min(32)]), "container JSON rejected");
        EnvelopeError::Json(e)
    })?;

    match container.get("type").and_then(Value::as_str) {
        Some(CONTAINER_TYPE) => {}
        other => warn!(container_type = ?other, "unexpected container type, reading anyway"),
    }

    match container.remove("payload") {
        Some(Value::Null) | None => {
            warn!("container has no payload field, using empty payload");
            Ok(P::default())
        }
        Some(payload) => serde_json::from_value(payload).map_err(EnvelopeError::Json),
    }
}

/// Decode a complete `.fmd` container into its payload.
pub fn decode_container<P>(blob: &[u8]) -> Result<P, EnvelopeError>
where
    P: DeserializeOwned + Default,
{
    let json = open(blob)?;
    parse_container(&json)
}
