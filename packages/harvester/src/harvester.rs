//! Main harvester service that ties all components together.

use std::path::PathBuf;

use crate::dispatch::{classify, extract_file};
use crate::input::{FileInput, InputFile};
use crate::types::{Diagnostic, FileOutcome, FileStatus, RunReport};

/// Harvest a batch of files.
///
/// Files are processed one after another in the given order. A file that
/// fails is reported in the diagnostics and its outcome; it never discards
/// what other files contributed, and the run always completes.
///
/// # Examples
/// ```
/// use integration_harvester::harvest;
/// use integration_harvester::input::MemoryInput;
///
/// let files = vec![
///     MemoryInput::text("partners_b2b.xml", r#"<Dir><Partner id="P1" name="Acme"/></Dir>"#),
///     MemoryInput::text("notes.txt", "ignored"),
/// ];
/// let report = harvest(&files);
///
/// assert_eq!(report.result.partners.len(), 1);
/// assert_eq!(report.errors().count(), 1);
/// ```
pub fn harvest<F: InputFile>(files: &[F]) -> RunReport {
    harvest_with_progress(files, |_, _| {})
}

/// Harvest files from disk.
pub fn harvest_paths(paths: &[PathBuf]) -> RunReport {
    let files: Vec<FileInput> = paths.iter().map(FileInput::new).collect();
    harvest(&files)
}

/// Harvest a batch of files, calling `progress` before each file starts.
///
/// The callback receives the zero-based file position and the file name.
pub fn harvest_with_progress<F, P>(files: &[F], mut progress: P) -> RunReport
where
    F: InputFile,
    P: FnMut(usize, &str),
{
    let mut report = RunReport::default();

    for (position, file) in files.iter().enumerate() {
        progress(position, file.name());
        process_file(file, &mut report);
    }

    let totals = report.result.counts();
    tracing::info!(
        files = files.len(),
        failed = report.files.iter().filter(|f| !f.is_success()).count(),
        interfaces = totals.interfaces,
        mappings = totals.mappings,
        partners = totals.partners,
        certificates = totals.certificates,
        "Harvest complete"
    );

    report
}

/// Extract one file and record its outcome.
fn process_file<F: InputFile + ?Sized>(file: &F, report: &mut RunReport) {
    let name = file.name();
    let kind = classify(name);

    tracing::info!(file = name, kind = kind.as_str(), "Processing file");
    report.diagnostics.push(Diagnostic::info(
        name,
        format!("Processing as {}", kind.as_str()),
    ));

    match extract_file(file, kind) {
        Ok(extraction) => {
            for warning in &extraction.warnings {
                report.diagnostics.push(Diagnostic::warning(name, warning.as_str()));
            }

            let counts = extraction.counts();
            tracing::debug!(file = name, %counts, "Extraction finished");
            report
                .diagnostics
                .push(Diagnostic::info(name, format!("Extracted {counts}")));

            report.result.append(extraction);
            report.files.push(FileOutcome {
                file: name.to_string(),
                kind,
                status: FileStatus::Extracted { counts },
            });
        }
        Err(err) => {
            tracing::warn!(file = name, error = %err, "Skipping file");
            report.diagnostics.push(Diagnostic::error(name, err.to_string()));
            report.files.push(FileOutcome {
                file: name.to_string(),
                kind,
                status: FileStatus::Failed {
                    error: err.to_string(),
                },
            });
        }
    }
}
