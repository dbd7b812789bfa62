//! Input files handed to a harvest run.
//!
//! The core never touches the file system directly: it only sees the
//! [`InputFile`] trait. [`FileInput`] adapts a path on disk and
//! [`MemoryInput`] wraps bytes that are already loaded.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A named, readable input.
pub trait InputFile {
    /// File name used for dispatch and diagnostics.
    fn name(&self) -> &str;

    /// Read the full contents as raw bytes.
    fn read_bytes(&self) -> Result<Vec<u8>>;

    /// Read the full contents as text.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_text(&self) -> Result<String> {
        let bytes = self.read_bytes()?;
        Ok(bytes_to_string(&bytes, self.name()))
    }
}

impl<T: InputFile + ?Sized> InputFile for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        (**self).read_bytes()
    }

    fn read_text(&self) -> Result<String> {
        (**self).read_text()
    }
}

impl<T: InputFile + ?Sized> InputFile for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        (**self).read_bytes()
    }

    fn read_text(&self) -> Result<String> {
        (**self).read_text()
    }
}

/// Decode bytes as UTF-8, replacing invalid sequences.
///
/// Logs a warning naming `context` when replacement was necessary.
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            tracing::warn!(file = context, "Input is not valid UTF-8, replaced invalid bytes");
            text
        }
    }
}

/// An input backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileInput {
    path: PathBuf,
    name: String,
}

impl FileInput {
    /// Create an input for the given path.
    ///
    /// The name is the final path component.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputFile for FileInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
}

/// An input held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryInput {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryInput {
    /// Create an input from raw bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Create an input from text.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, text.into().into_bytes())
    }
}

impl InputFile for MemoryInput {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
