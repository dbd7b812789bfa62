//! Report writer for harvest runs.
//!
//! Serializes a [`RunReport`] to YAML or JSON, either as a string or to a
//! file on disk.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::types::{Diagnostic, ExtractionCounts, FileOutcome, RunReport, RunResult};

/// Serialization format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Yaml,
    Json,
}

impl ReportFormat {
    /// Guess the format from a file extension, defaulting to YAML.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use integration_harvester::report::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path(Path::new("out.json")), ReportFormat::Json);
    /// assert_eq!(ReportFormat::from_path(Path::new("out.yml")), ReportFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Report layout as written to disk.
#[derive(Debug, Serialize)]
struct SerializedReport<'a> {
    summary: ExtractionCounts,
    files: &'a [FileOutcome],
    #[serde(flatten)]
    result: &'a RunResult,
    diagnostics: Vec<String>,
}

impl<'a> From<&'a RunReport> for SerializedReport<'a> {
    fn from(report: &'a RunReport) -> Self {
        Self {
            summary: report.result.counts(),
            files: &report.files,
            result: &report.result,
            diagnostics: report.diagnostics.iter().map(Diagnostic::to_string).collect(),
        }
    }
}

/// Render a report as text in the given format.
pub fn render_report(report: &RunReport, format: ReportFormat) -> Result<String> {
    let serialized = SerializedReport::from(report);
    let text = match format {
        ReportFormat::Yaml => serde_yaml_ng::to_string(&serialized)?,
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&serialized)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

/// Write a report to `path`, creating parent directories as needed.
pub fn save_report(report: &RunReport, path: &Path, format: ReportFormat) -> Result<()> {
    let text = render_report(report, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;

    tracing::debug!(path = %path.display(), "Report saved");
    Ok(())
}
