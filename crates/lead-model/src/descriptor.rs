//! Per-file metadata supplied by the manifest.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Describes one source export and the hints used to interpret it.
///
/// Free-text fields are expected to be scrubbed before the descriptor is
/// handed to schema detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Location of the export, relative to the manifest root.
    pub path: PathBuf,
    /// Free-text category label, e.g. `SB`, `UCC`, `YP`, `Last 90 Days`.
    #[serde(rename = "type", default)]
    pub type_hint: String,
    /// File-level zip hint; wins over any in-row zip.
    #[serde(default)]
    pub zip: String,
    /// File-level location hint; wins over any in-row location.
    #[serde(default)]
    pub location: String,
    /// Display name recorded on every record as `_source`.
    #[serde(default)]
    pub filename: String,
    /// Category label carried by non-tabular manifest entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FileDescriptor {
    /// Creates a descriptor whose filename is derived from `path`.
    pub fn new(path: impl Into<PathBuf>, type_hint: impl Into<String>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            type_hint: type_hint.into(),
            filename,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Returns true when the descriptor points at a CSV export.
    pub fn is_csv(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }
}
