// ## src/mapper/mod.rs

//! mapper/mod.rs
//! Structural mapping between the editable `Document` and the vendor
//! `ObjectGraph`.
//!
//! Mapping notes:
//! - Lossy: category names are lower-cased on export and
//!   capitalized on import ("INTRO" comes back as "Intro"); item kinds other
//!   than `check`/`detail` come back as `check`.
//! - Order is preserved at every level; nothing is sorted.
//! - Export stamps a fresh object id on every node. Import ignores ids.
//! - Import never fails. Missing data reads as empty strings, empty
//!   sequences and kind `check`.

pub mod ids;
pub mod to_graph;
pub mod from_graph;

pub use ids::*;
pub use to_graph::*;
pub use from_graph::*;
