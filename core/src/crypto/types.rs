// ## 📂 File: `src/crypto/types.rs`

use thiserror::Error;

/// AES-128 key length.
pub const KEY_LEN_16: usize = 16;

/// CBC initialization vector length.
pub const IV_LEN_16: usize = 16;

/// AES block length (bytes).
pub const AES_BLOCK_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum PaddingError {
    /// Nothing to unpad.
    #[error("padded buffer is empty")]
    Empty,

    /// Declared pad length is zero, larger than a block, or larger than the buffer.
    #[error("invalid PKCS#7 pad length: pad={pad}, block={block}, buffer={len}")]
    InvalidLength { pad: usize, block: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum CipherError {
    /// Invalid key or IV length handed to the block cipher.
    #[error("invalid key/iv length: key={key_len}, iv={iv_len}")]
    InvalidKeyIvLen { key_len: usize, iv_len: usize },

    /// Input is not a whole number of cipher blocks.
    #[error("input not block aligned: len={len}, block={block}")]
    NotBlockAligned { len: usize, block: usize },

    /// The OS random source refused to produce an IV.
    #[error("entropy source failure: {0}")]
    Entropy(String),
}
