// ## 📂 File: `src/types.rs`

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::envelope::EnvelopeError;
use crate::io::DocumentError;

/// Unified error covering the container codec, YAML documents and file I/O.
/// - `From<T>` impls let `?` flow across the conversion pipeline.
/// - Malformed containers are fatal; nothing here is retried.
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// `.fmd` envelope failure (mostly the malformed-container family).
    #[error("container error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// YAML document parse or emit failure.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// File read/write failure, with the offending path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ChecklistError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        ChecklistError::Io { path: path.to_path_buf(), source }
    }

    /// True when the input `.fmd` was corrupt, truncated or foreign-keyed.
    pub fn is_malformed_container(&self) -> bool {
        matches!(self, ChecklistError::Envelope(e) if e.is_malformed())
    }
}
