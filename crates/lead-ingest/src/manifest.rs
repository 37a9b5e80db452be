//! Manifest loading.
//!
//! A manifest is a JSON array of [`FileDescriptor`] entries. Paths are
//! resolved against the manifest's own directory.

use std::path::Path;

use lead_model::FileDescriptor;

use crate::error::{IngestError, Result};
use crate::pipeline::scrub_descriptor;
use crate::scrub::Scrubber;

/// Loads the CSV entries of a manifest, scrubbing every descriptor.
///
/// Entries that do not point at a `.csv` file are skipped.
pub fn load_manifest(path: &Path, scrubber: &Scrubber) -> Result<Vec<FileDescriptor>> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::from_io(path, e))?;
    let root = path.parent().unwrap_or_else(|| Path::new(""));
    parse_manifest(&content, root, scrubber).map_err(|source| IngestError::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses manifest JSON, resolving relative paths against `root`.
pub fn parse_manifest(
    content: &str,
    root: &Path,
    scrubber: &Scrubber,
) -> serde_json::Result<Vec<FileDescriptor>> {
    let entries: Vec<FileDescriptor> = serde_json::from_str(content)?;
    let total = entries.len();

    let descriptors: Vec<FileDescriptor> = entries
        .into_iter()
        .filter(|entry| {
            let keep = entry.is_csv();
            if !keep {
                tracing::debug!(path = %entry.path.display(), "skipping non-CSV manifest entry");
            }
            keep
        })
        .map(|mut entry| {
            if entry.filename.is_empty()
                && let Some(name) = entry.path.file_name()
            {
                entry.filename = name.to_string_lossy().into_owned();
            }
            if entry.path.is_relative() {
                entry.path = root.join(&entry.path);
            }
            scrub_descriptor(&entry, scrubber)
        })
        .collect();

    tracing::info!(entries = total, files = descriptors.len(), "loaded manifest");
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"[
        {"path": "SB/33101/Miami - Sunbiz.csv", "type": "SB", "zip": "33101", "location": "Miami"},
        {"path": "YP/Plumbers.csv", "type": "YP Yellowpages", "location": "Tampa", "filename": "Plumbers"},
        {"path": "Reports/summary.pdf", "type": "PDF", "category": "Reports"},
        {"path": "Reports/data.json", "type": "JSON"}
    ]"#;

    #[test]
    fn test_parse_skips_non_csv() {
        let files = parse_manifest(MANIFEST, Path::new("/data"), &Scrubber::default()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, Path::new("/data/SB/33101/Miami - Sunbiz.csv"));
        assert_eq!(files[0].filename, "Miami - Sunbiz.csv");
        assert_eq!(files[0].zip, "33101");
    }

    #[test]
    fn test_parse_scrubs_free_text() {
        let files = parse_manifest(MANIFEST, Path::new("/data"), &Scrubber::default()).unwrap();
        assert_eq!(files[1].type_hint, "YP");
        assert_eq!(files[1].filename, "Plumbers");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_manifest(r#"{"path": "a.csv"}"#, Path::new(""), &Scrubber::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_manifest_from_disk() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("manifest.json");
        std::fs::write(&manifest, MANIFEST).unwrap();

        let files = load_manifest(&manifest, &Scrubber::default()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].path.starts_with(dir.path()));
    }

    #[test]
    fn test_load_manifest_invalid_json() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("manifest.json");
        std::fs::write(&manifest, "not json").unwrap();

        let result = load_manifest(&manifest, &Scrubber::default());
        assert!(matches!(result, Err(IngestError::ManifestParse { .. })));
    }

    #[test]
    fn test_load_manifest_missing() {
        let result = load_manifest(Path::new("/no/such/manifest.json"), &Scrubber::default());
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
