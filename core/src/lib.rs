//! checklist-core
//!
//! Aviation checklist conversion between editable YAML, the ForeFlight
//! `.fmd` encrypted container, and LaTeX.
//! No CLI, no logging setup: callers own both.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Container codec
pub mod crypto;
pub mod envelope;

// Checklist tree
pub mod model;
pub mod mapper;

// Files, pipeline, output
pub mod io;
pub mod convert;
pub mod render;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::convert::{export_document, export_file, import_container, import_file, render_file};
    pub use crate::envelope::{decode_container, encode_container, EnvelopeError};
    pub use crate::mapper::{from_graph, to_graph, to_graph_with, ObjectIdSource, UuidIdSource};
    pub use crate::model::{Category, Checklist, Document, Group, Item, ItemKind, ObjectGraph};
    pub use crate::render::{latex_escape, render_latex, RenderOptions};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::ChecklistError;
}
