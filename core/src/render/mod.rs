//! render/mod.rs
//! Typeset output: Document → LaTeX.
//!
//! The renderer is a pure projection of the document. Every free-text field
//! goes through `latex_escape` before it reaches the output.

pub mod escape;
pub mod latex;

pub use escape::*;
pub use latex::*;
