// ## 📂 File: `src/crypto/padding.rs`

//! crypto/padding.rs
//! PKCS#7 padding for the CBC envelope.
//!
//! Design notes:
//! - Padding is always added: a block-aligned input grows by a full block.
//! - Unpadding only trusts the final byte. The pad bytes themselves are not
//!   compared, matching what the consumer of `.fmd` files accepts.

use crate::crypto::types::PaddingError;

/// Append PKCS#7 padding so the result is a multiple of `block`.
///
/// The pad value equals the number of bytes appended (1..=block).
#[inline]
pub fn pad_pkcs7(data: &[u8], block: usize) -> Vec<u8> {
    debug_assert!(block > 0 && block <= u8::MAX as usize);

    let pad = block - (data.len() % block);
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Strip PKCS#7 padding, returning the unpadded prefix.
///
/// # Errors
/// - `PaddingError::Empty` if `padded` has no bytes.
/// - `PaddingError::InvalidLength` if the last byte is 0, exceeds `block`,
///   or exceeds the buffer length.
#[inline]
pub fn unpad_pkcs7(padded: &[u8], block: usize) -> Result<&[u8], PaddingError> {
    let last = *padded.last().ok_or(PaddingError::Empty)?;
    let pad = last as usize;

    if pad == 0 || pad > block || pad > padded.len() {
        return Err(PaddingError::InvalidLength { pad, block, len: padded.len() });
    }

    Ok(&padded[..padded.len() - pad])
}
