// ## 📂 File: `src/io.rs`

//! io.rs
//! YAML document codec and whole-file helpers.
//!
//! Notes:
//! - Files are read whole and written whole; nothing streams.
//! - Writes go to a temp file next to the destination and are renamed into
//!   place, so a failed conversion never leaves a half-written output.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::model::Document;
use crate::types::ChecklistError;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid checklist YAML: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to emit checklist YAML: {0}")]
    Emit(#[source] serde_yaml::Error),
}

/// Parse a checklist document from YAML text.
///
/// An empty file reads as an empty document.
pub fn parse_document(yaml: &str) -> Result<Document, DocumentError> {
    if yaml.trim().is_empty() {
        return Ok(Document::default());
    }
    serde_yaml::from_str(yaml).map_err(DocumentError::Parse)
}

/// Emit a checklist document as YAML, keys in struct order.
pub fn document_to_yaml(doc: &Document) -> Result<String, DocumentError> {
    serde_yaml::to_string(doc).map_err(DocumentError::Emit)
}

/// Read the whole file at `path`.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ChecklistError> {
    let bytes = fs::read(path).map_err(|e| ChecklistError::io(path, e))?;
    debug!(path = %path.display(), len = bytes.len(), "file read");
    Ok(bytes)
}

/// Replace `path` with `bytes` via a sibling temp file and rename.
pub fn write_file_atomic(path: &Path, bytes: &[u8]) -> Result<(), ChecklistError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ChecklistError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| ChecklistError::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| ChecklistError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| ChecklistError::io(path, e.error))?;

    debug!(path = %path.display(), len = bytes.len(), "file written");
    Ok(())
}

/// Load a checklist document from a YAML file.
pub fn load_document(path: &Path) -> Result<Document, ChecklistError> {
    let bytes = read_file(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_document(&text)?)
}

/// Save a checklist document as a YAML file.
pub fn save_document(doc: &Document, path: &Path) -> Result<(), ChecklistError> {
    let yaml = document_to_yaml(doc)?;
    write_file_atomic(path, yaml.as_bytes())
}
