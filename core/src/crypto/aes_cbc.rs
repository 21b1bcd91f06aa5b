// ## 📂 File: `src/crypto/aes_cbc.rs`

//! src/crypto/aes_cbc.rs
//! AES-128-CBC block layer for the `.fmd` envelope.
//!
//! Design notes:
//! - Padding is handled by `crypto::padding`, so both directions run the
//!   cipher with `NoPadding` over whole blocks.
//! - Key and IV are taken as slices and length-checked, the same way the
//!   envelope hands them over.

use aes::Aes128;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::crypto::types::{CipherError, AES_BLOCK_LEN};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// Encrypt block-aligned plaintext with AES-128-CBC.
pub fn cbc_encrypt(key: &[u8], iv: &[u8], padded: &[u8]) -> Result<Vec<u8>, CipherError> {
    ensure_aligned(padded.len())?;

    let enc = Aes128CbcEnc::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyIvLen {
        key_len: key.len(),
        iv_len: iv.len(),
    })?;

    Ok(enc.encrypt_padded_vec_mut::<NoPadding>(padded))
}

/// Decrypt block-aligned ciphertext with AES-128-CBC. Padding is left in place.
pub fn cbc_decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
    ensure_aligned(ciphertext.len())?;

    let dec = Aes128CbcDec::new_from_slices(key, iv).map_err(|_| CipherError::InvalidKeyIvLen {
        key_len: key.len(),
        iv_len: iv.len(),
    })?;

    dec.decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| CipherError::NotBlockAligned { len: ciphertext.len(), block: AES_BLOCK_LEN })
}

#[inline]
fn ensure_aligned(len: usize) -> Result<(), CipherError> {
    if len % AES_BLOCK_LEN != 0 {
        return Err(CipherError::NotBlockAligned { len, block: AES_BLOCK_LEN });
    }
    Ok(())
}
