// ## 📂 File: `src/render/latex.rs`

//! render/latex.rs
//! LaTeX quick-reference layout for a checklist document.
//!
//! Layout:
//! - preamble (paper geometry from the paper-size tag, item macros)
//! - title page: name, tail number, detail, optional disclaimer
//! - per category a heading, per group an optional `\section*`,
//!   per checklist a `\subsection*`, then one macro per item
//!
//! Paper-size tags look like `a6single` / `a5double`: an ISO A size
//! (`a4`..`a7`) followed by `single` (one column) or `double` (two columns).

use std::fmt::Write;

use tracing::warn;

use crate::constants::DEFAULT_PAPERSIZE;
use crate::model::{Checklist, Document, Item, ItemKind};
use crate::render::escape::latex_escape;

/// Text placed on the title page when a disclaimer is requested.
pub const LEGAL_DISCLAIMER: &str = "This checklist is provided for reference only. \
It does not replace the approved Aircraft Flight Manual or Pilot's Operating Handbook. \
Always follow the manufacturer's official procedures.";

/// Presentation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Paper-size tag, e.g. `a6single`.
    pub papersize: String,
    /// Emit a `\section*` header per group.
    pub use_sections: bool,
    /// Put the legal disclaimer on the title page.
    pub legal_disclaimer: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            papersize: DEFAULT_PAPERSIZE.to_string(),
            use_sections: false,
            legal_disclaimer: false,
        }
    }
}

/// Parsed paper-size tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperSize {
    /// ISO A number, 4..=7.
    pub iso_a: u8,
    pub two_column: bool,
}

impl PaperSize {
    /// Parse a tag such as `a6single`. Returns `None` for anything else.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        let rest = tag.strip_prefix('a')?;
        let mut chars = rest.chars();
        let iso_a = chars.next()?.to_digit(10)? as u8;
        if !(4..=7).contains(&iso_a) {
            return None;
        }
        let two_column = match chars.as_str() {
            "" | "single" => false,
            "double" => true,
            _ => return None,
        };
        Some(Self { iso_a, two_column })
    }

    fn geometry(&self) -> String {
        format!("a{}paper", self.iso_a)
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        Self { iso_a: 6, two_column: false }
    }
}

/// Render `doc` as a complete LaTeX document.
pub fn render_latex(doc: &Document, opts: &RenderOptions) -> String {
    let paper = PaperSize::parse(&opts.papersize).unwrap_or_else(|| {
        warn!(papersize = %opts.papersize, "unknown paper size, using {}", DEFAULT_PAPERSIZE);
        PaperSize::default()
    });

    let mut out = String::with_capacity(4096);
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, doc, opts, paper);
    out
}

fn write_document(
    out: &mut String,
    doc: &Document,
    opts: &RenderOptions,
    paper: PaperSize,
) -> std::fmt::Result {
    write_preamble(out, paper)?;
    writeln!(out, r"\begin{{document}}")?;
    write_title_page(out, doc, opts)?;

    if paper.two_column {
        writeln!(out, r"\begin{{multicols}}{{2}}")?;
    }

    for category in &doc.categories {
        writeln!(out, r"\categoryheading{{{}}}", latex_escape(&category.name))?;
        for group in &category.groups {
            if opts.use_sections {
                writeln!(out, r"\section*{{{}}}", latex_escape(&group.name))?;
            }
            for checklist in &group.checklists {
                write_checklist(out, checklist)?;
            }
        }
    }

    if paper.two_column {
        writeln!(out, r"\end{{multicols}}")?;
    }
    writeln!(out, r"\end{{document}}")
}

fn write_preamble(out: &mut String, paper: PaperSize) -> std::fmt::Result {
    writeln!(out, r"\documentclass[10pt]{{article}}")?;
    writeln!(out, r"\usepackage[{},margin=8mm]{{geometry}}", paper.geometry())?;
    writeln!(out, r"\usepackage[T1]{{fontenc}}")?;
    writeln!(out, r"\usepackage[utf8]{{inputenc}}")?;
    writeln!(out, r"\usepackage{{textcomp}}")?;
    if paper.two_column {
        writeln!(out, r"\usepackage{{multicol}}")?;
    }
    writeln!(out, r"\setlength{{\parindent}}{{0pt}}")?;
    writeln!(out, r"\pagestyle{{empty}}")?;
    writeln!(out, r"\newcommand{{\categoryheading}}[1]{{\clearpage{{\Large\bfseries\MakeUppercase{{#1}}\par}}\medskip}}")?;
    writeln!(out, r"\newcommand{{\checkitem}}[2]{{#1\dotfill\textbf{{#2}}\par}}")?;
    writeln!(out, r"\newcommand{{\detailitem}}[2]{{\textit{{#1}}\ifx&#2&\else{{ #2}}\fi\par}}")?;
    writeln!(out, r"\newcommand{{\itemnote}}[1]{{\hspace*{{1em}}{{\small\textbf{{Note:}} #1}}\par}}")
}

fn write_title_page(out: &mut String, doc: &Document, opts: &RenderOptions) -> std::fmt::Result {
    writeln!(out, r"\begin{{titlepage}}")?;
    writeln!(out, r"\centering")?;
    writeln!(out, r"{{\Large\bfseries {}\par}}", latex_escape(&doc.name))?;
    if !doc.tail_number.is_empty() {
        writeln!(out, r"\vspace{{1em}}{{\large {}\par}}", latex_escape(&doc.tail_number))?;
    }
    if !doc.detail.is_empty() {
        writeln!(out, r"\vspace{{1em}}{}\par", latex_escape(&doc.detail))?;
    }
    if opts.legal_disclaimer {
        writeln!(out, r"\vfill")?;
        writeln!(out, r"{{\footnotesize {}\par}}", latex_escape(LEGAL_DISCLAIMER))?;
    }
    writeln!(out, r"\end{{titlepage}}")
}

fn write_checklist(out: &mut String, checklist: &Checklist) -> std::fmt::Result {
    writeln!(out, r"\subsection*{{{}}}", latex_escape(&checklist.name))?;
    for item in &checklist.items {
        write_item(out, item)?;
    }
    Ok(())
}

fn write_item(out: &mut String, item: &Item) -> std::fmt::Result {
    let text = latex_escape(&item.text);
    let detail = latex_escape(item.detail.as_deref().unwrap_or(""));

    match item.kind {
        ItemKind::Detail => writeln!(out, r"\detailitem{{{}}}{{{}}}", text, detail)?,
        ItemKind::Check | ItemKind::Other(_) => writeln!(out, r"\checkitem{{{}}}{{{}}}", text, detail)?,
    }

    if let Some(note) = item.note.as_deref().filter(|n| !n.is_empty()) {
        writeln!(out, r"\itemnote{{{}}}", latex_escape(note))?;
    }
    Ok(())
}
