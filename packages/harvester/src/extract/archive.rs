//! Mapping extraction from zip-compatible archives.
//!
//! Every entry whose path mentions "mapping" (any case) becomes an archive
//! mapping. Qualifying entries are read in parallel; the call returns only
//! once all of them are done.

use std::io::{Cursor, Read, Seek};

use rayon::prelude::*;
use zip::ZipArchive;

use crate::config::{truncate_chars, ARCHIVE_MAPPING_MARKER, SNIPPET_CHARS};
use crate::error::{HarvesterError, Result};
use crate::types::{ArchiveMapping, Extraction, Mapping};

/// Extract mapping fragments from an in-memory archive.
///
/// Entries that cannot be read as UTF-8 text are skipped and reported in
/// the extraction's warnings. Mappings keep archive entry order.
///
/// # Errors
/// Returns `HarvesterError::Archive` when the bytes are not a zip archive.
pub fn extract_archive_mappings(bytes: &[u8]) -> Result<Extraction> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut extraction = Extraction::default();

    let mut candidates = Vec::new();
    for index in 0..archive.len() {
        match archive.by_index_raw(index) {
            Ok(entry) => {
                if !entry.is_dir() && is_mapping_path(entry.name()) {
                    candidates.push((index, entry.name().to_string()));
                }
            }
            Err(e) => {
                let err = HarvesterError::UnreadableArchiveEntry {
                    path: format!("#{index}"),
                    reason: e.to_string(),
                };
                tracing::warn!(error = %err, "Skipping archive entry");
                extraction.warnings.push(err.to_string());
            }
        }
    }

    tracing::debug!(
        entries = archive.len(),
        candidates = candidates.len(),
        "Reading mapping entries"
    );

    let results: Vec<Result<Mapping>> = candidates
        .into_par_iter()
        .map_with(archive, |archive, (index, path)| {
            read_mapping(archive, index, &path)
        })
        .collect();

    for result in results {
        match result {
            Ok(mapping) => extraction.mappings.push(mapping),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping archive entry");
                extraction.warnings.push(err.to_string());
            }
        }
    }

    Ok(extraction)
}

/// Check whether an entry path marks a mapping (case-insensitive).
///
/// # Examples
/// ```
/// use integration_harvester::extract::archive::is_mapping_path;
///
/// assert!(is_mapping_path("c/MAPPING.json"));
/// assert!(!is_mapping_path("b/readme.txt"));
/// ```
pub fn is_mapping_path(path: &str) -> bool {
    path.to_lowercase().contains(ARCHIVE_MAPPING_MARKER)
}

/// Final segment of a forward-slash delimited entry path.
///
/// # Examples
/// ```
/// use integration_harvester::extract::archive::entry_name;
///
/// assert_eq!(entry_name("a/b/mapping_x.txt"), "mapping_x.txt");
/// assert_eq!(entry_name("mapping.txt"), "mapping.txt");
/// ```
pub fn entry_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn read_mapping<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
    path: &str,
) -> Result<Mapping> {
    let unreadable = |reason: String| HarvesterError::UnreadableArchiveEntry {
        path: path.to_string(),
        reason,
    };

    let mut entry = archive
        .by_index(index)
        .map_err(|e| unreadable(e.to_string()))?;
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| unreadable(e.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|e| unreadable(e.to_string()))?;

    Ok(Mapping::Archive(ArchiveMapping {
        name: entry_name(path).to_string(),
        path: path.to_string(),
        snippet: truncate_chars(&content, SNIPPET_CHARS),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: Vec<(&str, Vec<u8>)>) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (path, content) in entries {
            if path.ends_with('/') {
                writer
                    .add_directory(path, SimpleFileOptions::default())
                    .unwrap();
            } else {
                writer.start_file(path, SimpleFileOptions::default()).unwrap();
                writer.write_all(&content).unwrap();
            }
        }
        writer.finish().unwrap().into_inner()
    }

    fn text_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        build_zip(
            entries
                .iter()
                .map(|(path, content)| (*path, content.as_bytes().to_vec()))
                .collect(),
        )
    }

    fn names(extraction: &Extraction) -> Vec<&str> {
        extraction.mappings.iter().filter_map(Mapping::name).collect()
    }

    #[test]
    fn test_case_insensitive_selection() {
        let bytes = text_zip(&[
            ("a/mapping_x.txt", "source -> target"),
            ("b/readme.txt", "not a mapping"),
            ("c/MAPPING.json", "{}"),
        ]);

        let extraction = extract_archive_mappings(&bytes).unwrap();

        assert_eq!(names(&extraction), vec!["mapping_x.txt", "MAPPING.json"]);
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn test_mapping_fields() {
        let content = "x".repeat(500);
        let bytes = text_zip(&[("Mappings/MM_Order.xsl", content.as_str())]);

        let extraction = extract_archive_mappings(&bytes).unwrap();

        assert_eq!(
            extraction.mappings,
            vec![Mapping::Archive(ArchiveMapping {
                name: "MM_Order.xsl".to_string(),
                path: "Mappings/MM_Order.xsl".to_string(),
                snippet: "x".repeat(200),
            })]
        );
    }

    #[test]
    fn test_directory_entries_are_skipped() {
        let bytes = text_zip(&[("mappings/", ""), ("mappings/one.txt", "1")]);

        let extraction = extract_archive_mappings(&bytes).unwrap();

        assert_eq!(names(&extraction), vec!["one.txt"]);
    }

    #[test]
    fn test_undecodable_entry_is_skipped_with_warning() {
        let bytes = build_zip(vec![
            ("mapping/binary.bin", vec![0xff, 0xfe, 0x00, 0x81]),
            ("mapping/text.txt", b"ok".to_vec()),
        ]);

        let extraction = extract_archive_mappings(&bytes).unwrap();

        assert_eq!(names(&extraction), vec!["text.txt"]);
        assert_eq!(extraction.warnings.len(), 1);
        assert!(extraction.warnings[0].contains("mapping/binary.bin"));
    }

    #[test]
    fn test_many_entries_keep_archive_order() {
        let paths: Vec<String> = (0..64).map(|i| format!("maps/mapping_{i:02}.txt")).collect();
        let entries: Vec<(&str, &str)> = paths.iter().map(|p| (p.as_str(), p.as_str())).collect();
        let bytes = text_zip(&entries);

        let extraction = extract_archive_mappings(&bytes).unwrap();

        let expected: Vec<String> = (0..64).map(|i| format!("mapping_{i:02}.txt")).collect();
        assert_eq!(names(&extraction), expected);
    }

    #[test]
    fn test_not_an_archive() {
        let result = extract_archive_mappings(b"definitely not a zip file");
        assert!(matches!(result, Err(HarvesterError::Archive(_))));
    }

    #[test]
    fn test_empty_archive() {
        let bytes = text_zip(&[]);
        let extraction = extract_archive_mappings(&bytes).unwrap();
        assert!(extraction.mappings.is_empty());
    }
}
