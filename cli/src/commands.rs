use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use checklist_core::convert::{export_file, import_file, render_file};
use checklist_core::render::RenderOptions;
use checklist_core::telemetry::TelemetrySnapshot;

pub fn import_fmd(fmd: &Path, yaml: &Path) -> Result<()> {
    ensure_input(fmd)?;
    let snapshot = import_file(fmd, yaml)
        .with_context(|| format!("failed to import {}", fmd.display()))?;
    log_snapshot(&snapshot);
    println!("Imported {} -> {}", fmd.display(), yaml.display());
    Ok(())
}

pub fn export_fmd(yaml: &Path, fmd: &Path) -> Result<()> {
    ensure_input(yaml)?;
    let snapshot = export_file(yaml, fmd)
        .with_context(|| format!("failed to export {}", yaml.display()))?;
    log_snapshot(&snapshot);
    println!("Exported {} -> {}", yaml.display(), fmd.display());
    Ok(())
}

pub fn render_latex(
    yaml: &Path,
    output: &Path,
    papersize: String,
    use_sections: bool,
    legal_disclaimer: bool,
) -> Result<()> {
    ensure_input(yaml)?;
    let opts = RenderOptions { papersize, use_sections, legal_disclaimer };
    let snapshot = render_file(yaml, output, &opts)
        .with_context(|| format!("failed to render {}", yaml.display()))?;
    log_snapshot(&snapshot);
    println!("Rendered {} -> {}", yaml.display(), output.display());
    Ok(())
}

fn ensure_input(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("input file not found: {}", path.display());
    }
    Ok(())
}

fn log_snapshot(s: &TelemetrySnapshot) {
    debug!(
        categories = s.categories,
        groups = s.groups,
        checklists = s.checklists,
        items = s.items,
        bytes_document = s.bytes_document,
        bytes_container = s.bytes_container,
        elapsed_ms = s.elapsed.as_secs_f64() * 1_000.0,
        "conversion telemetry"
    );
    for (stage, dur) in &s.stage_times {
        debug!(%stage, us = dur.as_micros() as u64, "stage time");
    }
}
