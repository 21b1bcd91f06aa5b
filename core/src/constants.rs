// ## 📂 File: `src/constants.rs`

//! constants.rs
//! Wire constants of the ForeFlight `.fmd` container and checklist mapping.
//!
//! Every value here is part of the interchange format. Changing any of them
//! produces files the external consumer can no longer read.

use crate::crypto::KEY_LEN_16;

/// AES-128 key shared by every `.fmd` file (16 ASCII bytes).
///
/// Fixed by the vendor format; the consumer only accepts containers sealed
/// under exactly this key.
pub const CONTAINER_KEY: [u8; KEY_LEN_16] = *b"81e06e41a93f3848";

/// AES block size; also the IV length and the PKCS#7 padding modulus.
pub const BLOCK_LEN: usize = 16;

/// IV prefix length of an encoded container.
pub const IV_LEN: usize = BLOCK_LEN;

/// Value of the container `type` field.
pub const CONTAINER_TYPE: &str = "checklist";

/// Vendor tag for detail items.
pub const DETAIL_ITEM_TAG: &str = "comment";

/// Schema version used when the document does not carry one.
pub const SCHEMA_VERSION_DEFAULT: &str = "1.0";

/// Document item kinds.
pub mod item_kinds {
    pub const CHECK: &str = "check";
    pub const DETAIL: &str = "detail";
}

/// Paper size tag used by the renderer when none is given.
pub const DEFAULT_PAPERSIZE: &str = "a6single";
