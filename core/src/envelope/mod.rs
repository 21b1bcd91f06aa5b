// ## src/envelope/mod.rs

//! envelope/mod.rs
//! The `.fmd` binary container: `IV(16) || AES-128-CBC(PKCS#7(json))`.
//!
//! Format notes:
//! - The plaintext is compact JSON `{"type":"checklist","payload":{...}}`,
//!   keys in construction order, no whitespace.
//! - The key is fixed by the vendor format (`constants::CONTAINER_KEY`);
//!   only the IV varies between files.
//! - The codec is generic over the payload type and knows nothing about
//!   checklists. The mapper builds the payload, the envelope seals it.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
