//! Core data types for the harvester.
//!
//! These types represent the integration metadata pulled out of exports:
//! interfaces, mappings, trading partners and certificates, plus the
//! per-run bookkeeping (outcomes and diagnostics) around them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::provenance_name;

/// A field or archive mapping.
///
/// Which variant is present records where the mapping came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mapping {
    /// Mapping fragment found inside an archive.
    Archive(ArchiveMapping),

    /// Field mapping declared inside a configuration item.
    Field(FieldMapping),
}

impl Mapping {
    /// Display name of the mapping, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Archive(mapping) => Some(&mapping.name),
            Self::Field(mapping) => mapping.name.as_deref(),
        }
    }
}

/// Mapping fragment read from an archive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveMapping {
    /// Final segment of the entry path.
    pub name: String,

    /// Full entry path inside the archive.
    pub path: String,

    /// Leading characters of the entry content.
    pub snippet: String,
}

/// Source-to-target field mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Source field name.
    pub source: String,

    /// Target field name.
    pub target: String,

    /// Transformation program name.
    pub program: String,

    /// Provenance name (`[ICO] <id>`), set only on the flattened list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FieldMapping {
    /// Copy this mapping, tagged with the interface it belongs to.
    #[must_use]
    pub fn tagged(&self, interface_id: &str) -> Self {
        Self {
            name: Some(provenance_name(interface_id)),
            ..self.clone()
        }
    }
}

/// An integration interface (configuration item).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// Identifier, empty when the source carries none.
    pub id: String,

    /// Sender party name.
    pub sender: String,

    /// Receiver party name.
    pub receiver: String,

    /// Adapter type name.
    pub adapter: String,

    /// Module names in declaration order.
    pub modules: Vec<String>,

    /// Mappings declared within this interface.
    pub mappings: Vec<FieldMapping>,
}

/// A trading partner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// Partner identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact string.
    pub contact: String,
}

/// Validity window of a certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    /// Start of validity.
    pub from: String,

    /// End of validity.
    pub to: String,
}

/// A certificate reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Alias, generated sequentially when the source has none.
    pub alias: String,

    /// Subject string (a placeholder for PEM-derived certificates).
    pub subject: String,

    /// Validity window, only known for XML-derived certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity: Option<ValidityWindow>,
}

/// Records extracted from a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Interfaces in discovery order.
    pub interfaces: Vec<Interface>,

    /// Flattened or archive mappings in discovery order.
    pub mappings: Vec<Mapping>,

    /// Partners in discovery order.
    pub partners: Vec<Partner>,

    /// Certificates in discovery order.
    pub certificates: Vec<Certificate>,

    /// Non-fatal problems (e.g. skipped archive entries).
    pub warnings: Vec<String>,
}

impl Extraction {
    /// Count the records per entity type.
    #[must_use]
    pub fn counts(&self) -> ExtractionCounts {
        ExtractionCounts {
            interfaces: self.interfaces.len(),
            mappings: self.mappings.len(),
            partners: self.partners.len(),
            certificates: self.certificates.len(),
        }
    }
}

/// Number of records per entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionCounts {
    pub interfaces: usize,
    pub mappings: usize,
    pub partners: usize,
    pub certificates: usize,
}

impl fmt::Display for ExtractionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} interfaces, {} mappings, {} partners, {} certificates",
            self.interfaces, self.mappings, self.partners, self.certificates
        )
    }
}

/// The four entity collections accumulated over one run.
///
/// Collections are append-only: records keep file order, then discovery
/// order within each file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub interfaces: Vec<Interface>,
    pub mappings: Vec<Mapping>,
    pub partners: Vec<Partner>,
    pub certificates: Vec<Certificate>,
}

impl RunResult {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records of one file.
    pub fn append(&mut self, extraction: Extraction) {
        self.interfaces.extend(extraction.interfaces);
        self.mappings.extend(extraction.mappings);
        self.partners.extend(extraction.partners);
        self.certificates.extend(extraction.certificates);
    }

    /// Count the accumulated records per entity type.
    #[must_use]
    pub fn counts(&self) -> ExtractionCounts {
        ExtractionCounts {
            interfaces: self.interfaces.len(),
            mappings: self.mappings.len(),
            partners: self.partners.len(),
            certificates: self.certificates.len(),
        }
    }

    /// Check whether nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
            && self.mappings.is_empty()
            && self.partners.is_empty()
            && self.certificates.is_empty()
    }
}

/// Which extraction path a file was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Configuration export (`*ico*.xml`).
    Configuration,

    /// Mapping archive (`.zip`, `.tpz`).
    MappingArchive,

    /// Partner directory (`*b2b*`, `*partner*`).
    PartnerDirectory,

    /// PEM certificate bundle (`.crt`, `.pem`).
    CertificateBundle,

    /// No rule matched.
    Unrecognized,
}

impl FileKind {
    /// Human-readable label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration export",
            Self::MappingArchive => "mapping archive",
            Self::PartnerDirectory => "partner directory",
            Self::CertificateBundle => "certificate bundle",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// How processing one file ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Extraction succeeded with these counts.
    Extracted { counts: ExtractionCounts },

    /// Extraction failed; nothing from the file was kept.
    Failed { error: String },
}

/// Outcome of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Input file name.
    pub file: String,

    /// Extraction path chosen for the file.
    pub kind: FileKind,

    /// Result of the extraction.
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    /// Check whether the file was extracted successfully.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Extracted { .. })
    }
}

/// Severity of a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Get the string value used in rendered lines.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// One file-level event of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub file: String,
    pub message: String,
}

impl Diagnostic {
    pub fn info(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, file, message)
    }

    pub fn warning(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, file, message)
    }

    pub fn error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, file, message)
    }

    fn new(severity: Severity, file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            file: file.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.as_str(), self.file, self.message)
    }
}

/// Complete result of a harvest run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Accumulated entity collections.
    pub result: RunResult,

    /// One outcome per input file, in input order.
    pub files: Vec<FileOutcome>,

    /// Diagnostic lines in the order they were produced.
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    /// Diagnostics at error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }
}
