pub mod types;
pub mod aes_cbc;
pub mod iv;
pub mod padding;

pub use types::*;
pub use aes_cbc::*;
pub use iv::*;
pub use padding::*;
