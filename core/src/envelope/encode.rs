// ## 📂 File: `src/envelope/encode.rs`
//! src/envelope/encode.rs
//!
//! Container encoding.
//!
//! Design notes:
//! - `serialize_container` and `seal` are split so callers can account for
//!   plaintext and padding sizes; `encode_container` chains both.
//! - Container JSON is compact and ASCII-only (non-ASCII as `\uXXXX`).
//! - Padding is always applied, including a full block for aligned input.
//! - Every `seal` draws a new IV. `seal_with_iv` exists for fixed vectors.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use tracing::{debug, trace};

use crate::constants::{BLOCK_LEN, CONTAINER_KEY, CONTAINER_TYPE, IV_LEN};
use crate::crypto::{cbc_encrypt, generate_iv, pad_pkcs7};
use crate::envelope::types::{ContainerRef, EnvelopeError};

/// Compact JSON that writes every character outside printable ASCII as a
/// `\uXXXX` escape (UTF-16 code units), so `"90°"` becomes `"90\u00b0"`.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `payload` wrapped in the `{"type","payload"}` container as
/// compact, ASCII-only JSON.
pub fn serialize_container<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>, EnvelopeError> {
    let container = ContainerRef { kind: CONTAINER_TYPE, payload };

    let mut out = Vec::with_capacity(256);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter);
    container.serialize(&mut ser).map_err(EnvelopeError::Serialize)?;
    Ok(out)
}

/// Pad and encrypt `plaintext` under a fresh random IV.
///
/// # Returns
/// `IV || ciphertext`, always `IV_LEN + k * BLOCK_LEN` bytes with `k >= 1`.
pub fn seal(plaintext: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let iv = generate_iv()?;
    seal_with_iv(plaintext, &iv)
}

/// Pad and encrypt `plaintext` under the given IV.
pub fn seal_with_iv(plaintext: &[u8], iv: &[u8; IV_LEN]) -> Result<Vec<u8>, EnvelopeError> {
    let padded = pad_pkcs7(plaintext, BLOCK_LEN);
    let ciphertext = cbc_encrypt(&CONTAINER_KEY, iv, &padded)?;

    trace!(iv = %hex::encode(iv), "sealed container");
    debug!(
        plaintext_len = plaintext.len(),
        padding_len = padded.len() - plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "container sealed"
    );

    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
    out.extend_from_slice(iv);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Encode `payload` into a complete `.fmd` container.
pub fn encode_container<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>, EnvelopeError> {
    let json = serialize_container(payload)?;
    seal(&json)
}

/// Encode `payload` with a caller-chosen IV. Output is reproducible.
pub fn encode_container_with_iv<P: Serialize + ?Sized>(
    payload: &P,
    iv: &[u8; IV_LEN],
) -> Result<Vec<u8>, EnvelopeError> {
    let json = serialize_container(payload)?;
    seal_with_iv(&json, iv)
}
