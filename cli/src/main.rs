//! checklist
//!
//! Command-line front end: argument parsing, input checks, dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use checklist_core::constants::DEFAULT_PAPERSIZE;

mod commands;

#[derive(Parser)]
#[command(
    name = "checklist",
    version,
    about = "Aviation checklist management suite (YAML, ForeFlight .fmd, LaTeX)"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import ForeFlight .fmd to YAML
    ImportFmd {
        /// Input .fmd file path
        fmd: PathBuf,
        /// Output YAML file path
        yaml: PathBuf,
    },
    /// Export YAML to ForeFlight .fmd
    ExportFmd {
        /// Input YAML file path
        yaml: PathBuf,
        /// Output .fmd file path
        fmd: PathBuf,
    },
    /// Render LaTeX checklist from YAML
    RenderLatex {
        /// Input YAML checklist
        yaml: PathBuf,
        /// Output .tex file
        output: PathBuf,
        /// Paper size tag (a4..a7, suffix single/double)
        #[arg(long, default_value = DEFAULT_PAPERSIZE)]
        papersize: String,
        /// Include section headers for subgroups
        #[arg(long)]
        use_sections: bool,
        /// Include legal disclaimer on title page
        #[arg(long, alias = "legal_disclaimer")]
        legal_disclaimer: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::ImportFmd { fmd, yaml } => commands::import_fmd(&fmd, &yaml),
        Command::ExportFmd { yaml, fmd } => commands::export_fmd(&yaml, &fmd),
        Command::RenderLatex {
            yaml,
            output,
            papersize,
            use_sections,
            legal_disclaimer,
        } => commands::render_latex(&yaml, &output, papersize, use_sections, legal_disclaimer),
    }
}
