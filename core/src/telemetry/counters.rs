// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters used during a conversion.
//!
//! Summary: tree node counts plus byte counts per envelope layer.
//! Converted into an immutable TelemetrySnapshot at the end.

use serde::{Deserialize, Serialize};

use crate::constants::IV_LEN;
use crate::model::Document;

/// Deterministic counters collected during one conversion.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub categories: u64,
    pub groups: u64,
    pub checklists: u64,
    pub items: u64,
    /// YAML bytes read or written.
    pub bytes_document: u64,
    /// Container JSON bytes (before padding / after unpadding).
    pub bytes_plaintext: u64,
    pub bytes_padding: u64,
    /// Complete `.fmd` blob, IV included.
    pub bytes_container: u64,
}

impl TelemetryCounters {
    /// Count the nodes of a document tree.
    pub fn add_tree(&mut self, doc: &Document) {
        for category in &doc.categories {
            self.categories += 1;
            for group in &category.groups {
                self.groups += 1;
                for checklist in &group.checklists {
                    self.checklists += 1;
                    self.items += checklist.items.len() as u64;
                }
            }
        }
    }

    pub fn add_document(&mut self, len: usize) {
        self.bytes_document += len as u64;
    }

    /// Record one sealed or opened container.
    ///
    /// - `plaintext_len`: container JSON length
    /// - `container_len`: total blob length including IV
    pub fn add_container(&mut self, plaintext_len: usize, container_len: usize) {
        self.bytes_plaintext += plaintext_len as u64;
        self.bytes_container += container_len as u64;
        self.bytes_padding += container_len.saturating_sub(IV_LEN + plaintext_len) as u64;
    }

    /// Total tree nodes, items included.
    pub fn nodes(&self) -> u64 {
        self.categories + self.groups + self.checklists + self.items
    }
}
