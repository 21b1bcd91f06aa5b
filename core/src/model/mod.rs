//! model/mod.rs
//! Data shapes on both sides of the mapper.
//!
//! - `document`: the editable YAML checklist tree.
//! - `graph`: the vendor object graph carried inside the `.fmd` container.

pub mod de;
pub mod document;
pub mod graph;

pub use document::*;
pub use graph::*;
