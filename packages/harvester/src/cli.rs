//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::dispatch::classify;
use crate::error::{HarvesterError, Result};
use crate::harvester::harvest_with_progress;
use crate::input::{FileInput, InputFile};
use crate::report::{save_report, ReportFormat};
use crate::types::{RunReport, Severity};

/// Integration Harvester - Extract interfaces, mappings, partners and
/// certificates from integration exports.
#[derive(Parser)]
#[command(name = "integration-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract entities from one or more files.
    Extract {
        /// Files to process, in order.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write the full report to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format (default: from the output extension, else yaml).
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Show which extractor each file would be routed to.
    Classify {
        /// File names to classify.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            files,
            output,
            format,
        } => extract_command(&files, output.as_deref(), format),
        Commands::Classify { files } => {
            classify_command(&files);
            Ok(())
        }
    }
}

/// Execute the extract command.
fn extract_command(
    paths: &[PathBuf],
    output: Option<&Path>,
    format: Option<ReportFormat>,
) -> Result<()> {
    // Validate the output location before doing any work
    if let Some(parent) = output.and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(HarvesterError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    let files: Vec<FileInput> = paths.iter().map(FileInput::new).collect();

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{pos}/{len}] {msg}")
            .expect("valid template"),
    );

    let report = harvest_with_progress(&files, |position, name| {
        pb.set_position(position as u64);
        pb.set_message(name.to_string());
    });
    pb.finish_and_clear();

    print_report(&report);

    if let Some(path) = output {
        let format = format.unwrap_or_else(|| ReportFormat::from_path(path));
        save_report(&report, path, format)?;
        println!();
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }

    Ok(())
}

/// Execute the classify command.
fn classify_command(paths: &[PathBuf]) {
    for path in paths {
        let input = FileInput::new(path);
        let name = input.name();
        println!("{}  {}", style(classify(name).as_str()).cyan(), name);
    }
}

fn print_report(report: &RunReport) {
    for diagnostic in &report.diagnostics {
        let label = match diagnostic.severity {
            Severity::Info => style(diagnostic.severity.as_str()).dim(),
            Severity::Warning => style(diagnostic.severity.as_str()).yellow(),
            Severity::Error => style(diagnostic.severity.as_str()).red().bold(),
        };
        println!("{label:>5} {}: {}", diagnostic.file, diagnostic.message);
    }

    let counts = report.result.counts();
    let failed = report.files.iter().filter(|f| !f.is_success()).count();

    println!();
    println!("  Interfaces:   {}", style(counts.interfaces).green());
    println!("  Mappings:     {}", style(counts.mappings).green());
    println!("  Partners:     {}", style(counts.partners).green());
    println!("  Certificates: {}", style(counts.certificates).green());
    if failed > 0 {
        println!("  Failed files: {}", style(failed).yellow().bold());
    }
}
