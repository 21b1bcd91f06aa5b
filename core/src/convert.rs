// ## 📂 File: `src/convert.rs`

//! convert.rs
//! Stable public API: whole conversions between YAML, `.fmd` and LaTeX.
//!
//! Flow:
//! - export: YAML → Document → ObjectGraph → container JSON → `.fmd`
//! - import: `.fmd` → container JSON → ObjectGraph → Document → YAML
//! - render: YAML → Document → LaTeX
//!
//! Each file conversion reads its input once, converts fully in memory and
//! only then writes the output. Any failure leaves the output untouched.

use std::path::Path;

use tracing::info;

use crate::envelope::{decode_container, encode_container, open, parse_container, seal, serialize_container};
use crate::io::{document_to_yaml, parse_document, read_file, write_file_atomic};
use crate::mapper::{from_graph, to_graph};
use crate::model::{Document, ObjectGraph};
use crate::render::{render_latex, RenderOptions};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::ChecklistError;

/// Document → `.fmd` bytes.
pub fn export_document(doc: &Document) -> Result<Vec<u8>, ChecklistError> {
    Ok(encode_container(&to_graph(doc))?)
}

/// `.fmd` bytes → Document.
pub fn import_container(blob: &[u8]) -> Result<Document, ChecklistError> {
    let graph: ObjectGraph = decode_container(blob)?;
    Ok(from_graph(&graph))
}

/// Convert a YAML checklist file into a `.fmd` container file.
pub fn export_file(yaml_path: &Path, fmd_path: &Path) -> Result<TelemetrySnapshot, ChecklistError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let doc = load_counted(yaml_path, &mut timer, &mut counters)?;
    counters.add_tree(&doc);

    let graph = timer.measure(Stage::Map, || to_graph(&doc));
    let json = timer.measure(Stage::Serialize, || serialize_container(&graph))?;
    let blob = timer.measure(Stage::Encrypt, || seal(&json))?;
    counters.add_container(json.len(), blob.len());

    timer.measure(Stage::Write, || write_file_atomic(fmd_path, &blob))?;

    timer.finish();
    let snapshot = TelemetrySnapshot::from(&counters, &timer);
    info!(
        input = %yaml_path.display(),
        output = %fmd_path.display(),
        nodes = counters.nodes(),
        bytes = snapshot.bytes_container,
        encrypt_us = snapshot.stage_times.get(Stage::Encrypt).as_micros() as u64,
        "exported checklist"
    );
    Ok(snapshot)
}

/// Convert a `.fmd` container file into a YAML checklist file.
pub fn import_file(fmd_path: &Path, yaml_path: &Path) -> Result<TelemetrySnapshot, ChecklistError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let blob = timer.measure(Stage::Read, || read_file(fmd_path))?;
    let json = timer.measure(Stage::Decrypt, || open(&blob))?;
    counters.add_container(json.len(), blob.len());

    let graph: ObjectGraph = timer.measure(Stage::Parse, || parse_container(&json))?;
    let doc = timer.measure(Stage::Map, || from_graph(&graph));
    counters.add_tree(&doc);

    let yaml = timer.measure(Stage::Serialize, || document_to_yaml(&doc))?;
    counters.add_document(yaml.len());
    timer.measure(Stage::Write, || write_file_atomic(yaml_path, yaml.as_bytes()))?;

    timer.finish();
    let snapshot = TelemetrySnapshot::from(&counters, &timer);
    info!(
        input = %fmd_path.display(),
        output = %yaml_path.display(),
        nodes = counters.nodes(),
        decrypt_us = snapshot.stage_times.get(Stage::Decrypt).as_micros() as u64,
        "imported checklist"
    );
    Ok(snapshot)
}

/// Render a YAML checklist file as a LaTeX document.
pub fn render_file(
    yaml_path: &Path,
    tex_path: &Path,
    opts: &RenderOptions,
) -> Result<TelemetrySnapshot, ChecklistError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let doc = load_counted(yaml_path, &mut timer, &mut counters)?;
    counters.add_tree(&doc);

    let tex = timer.measure(Stage::Render, || render_latex(&doc, opts));
    timer.measure(Stage::Write, || write_file_atomic(tex_path, tex.as_bytes()))?;

    timer.finish();
    let snapshot = TelemetrySnapshot::from(&counters, &timer);
    info!(
        input = %yaml_path.display(),
        output = %tex_path.display(),
        papersize = %opts.papersize,
        nodes = counters.nodes(),
        "rendered checklist"
    );
    Ok(snapshot)
}

fn load_counted(
    path: &Path,
    timer: &mut TelemetryTimer,
    counters: &mut TelemetryCounters,
) -> Result<Document, ChecklistError> {
    let bytes = timer.measure(Stage::Read, || read_file(path))?;
    counters.add_document(bytes.len());

    let text = String::from_utf8_lossy(&bytes);
    Ok(timer.measure(Stage::Parse, || parse_document(&text))?)
}
