//! File classification and per-kind extraction.
//!
//! A file's name alone decides which extractor reads it. Rules are checked
//! in a fixed order and the first match wins, so `ico-partner.xml` is a
//! configuration export even though it also mentions "partner".

use crate::config::{
    ARCHIVE_SUFFIXES, CERTIFICATE_SUFFIXES, CONFIGURATION_MARKER, PARTNER_MARKERS,
};
use crate::error::{HarvesterError, Result};
use crate::extract::{
    extract_archive_mappings, extract_configuration, extract_directory_partners,
    extract_pem_certificates,
};
use crate::input::InputFile;
use crate::types::{Extraction, FileKind};
use crate::xml::NormalizedXml;

/// Classify a file by name (case-insensitive).
///
/// # Examples
/// ```
/// use integration_harvester::dispatch::classify;
/// use integration_harvester::types::FileKind;
///
/// assert_eq!(classify("ICO_Export.XML"), FileKind::Configuration);
/// assert_eq!(classify("ico-partner.xml"), FileKind::Configuration);
/// assert_eq!(classify("mappings.tpz"), FileKind::MappingArchive);
/// assert_eq!(classify("partners.xml"), FileKind::PartnerDirectory);
/// assert_eq!(classify("server.crt"), FileKind::CertificateBundle);
/// assert_eq!(classify("notes.txt"), FileKind::Unrecognized);
/// ```
pub fn classify(file_name: &str) -> FileKind {
    let name = file_name.to_lowercase();

    if name.ends_with(".xml") && name.contains(CONFIGURATION_MARKER) {
        FileKind::Configuration
    } else if ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        FileKind::MappingArchive
    } else if PARTNER_MARKERS.iter().any(|marker| name.contains(marker)) {
        FileKind::PartnerDirectory
    } else if CERTIFICATE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        FileKind::CertificateBundle
    } else {
        FileKind::Unrecognized
    }
}

/// Read a file and run the extractor for its kind.
///
/// # Errors
/// Returns the first error that stops this file from being extracted:
/// an unreadable input, malformed XML, a broken archive, or
/// `UnrecognizedFileType` when no rule matched.
pub fn extract_file<F: InputFile + ?Sized>(file: &F, kind: FileKind) -> Result<Extraction> {
    match kind {
        FileKind::Configuration => {
            let xml = NormalizedXml::new(&file.read_text()?);
            let doc = xml.parse()?;
            Ok(extract_configuration(doc.root()))
        }
        FileKind::MappingArchive => extract_archive_mappings(&file.read_bytes()?),
        FileKind::PartnerDirectory => {
            let xml = NormalizedXml::new(&file.read_text()?);
            let doc = xml.parse()?;
            Ok(Extraction {
                partners: extract_directory_partners(doc.root()),
                ..Extraction::default()
            })
        }
        FileKind::CertificateBundle => Ok(Extraction {
            certificates: extract_pem_certificates(&file.read_text()?),
            ..Extraction::default()
        }),
        FileKind::Unrecognized => Err(HarvesterError::UnrecognizedFileType(
            file.name().to_string(),
        )),
    }
}
