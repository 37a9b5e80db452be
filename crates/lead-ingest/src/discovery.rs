//! Data directory discovery.
//!
//! Builds file descriptors from the on-disk layout when no manifest is
//! given. The conventions:
//!
//! - The first directory below the root is the type hint. Files at the
//!   root are `YP` when named `YP ...`, else `General`.
//! - A five-digit type directory is also the zip hint, as is any second
//!   directory level.
//! - Location comes from `Lookup <X> -` in the filename, else the
//!   filename without `.csv` and the lookup prefix.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use lead_model::FileDescriptor;
use regex::Regex;

use crate::error::{IngestError, Result};
use crate::pipeline::scrub_descriptor;
use crate::scrub::Scrubber;

/// Type hint for files directly under the root.
pub const GENERAL_TYPE: &str = "General";
const DIRECTORY_TYPE: &str = "YP";
const LOOKUP_PREFIX: &str = "YP Phone Number Lookup ";

static LOOKUP_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Lookup\s+(.*?)\s+-").expect("Invalid lookup location regex"));

/// Walks `root` and returns a descriptor per CSV file, scrubbed and sorted.
pub fn discover_files(root: &Path, scrubber: &Scrubber) -> Result<Vec<FileDescriptor>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    collect_csv_files(root, &mut paths)?;

    let mut descriptors: Vec<FileDescriptor> = paths
        .into_iter()
        .filter_map(|path| describe(root, path))
        .map(|descriptor| scrub_descriptor(&descriptor, scrubber))
        .collect();
    descriptors.sort_by(compare_descriptors);

    tracing::info!(root = %root.display(), files = descriptors.len(), "discovered data files");
    Ok(descriptors)
}

fn collect_csv_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_csv_files(&path, out)?;
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            out.push(path);
        }
    }

    Ok(())
}

/// Derives the descriptor for one file from its position under `root`.
fn describe(root: &Path, path: PathBuf) -> Option<FileDescriptor> {
    let relative = path.strip_prefix(root).ok()?;
    let filename = relative.file_name()?.to_string_lossy().into_owned();
    let dirs: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    let mut zip = String::new();
    let type_hint = match dirs.first() {
        Some(first) => {
            if is_zip_hub(first) {
                zip = first.clone();
            }
            first.clone()
        }
        None if filename.starts_with("YP ") => DIRECTORY_TYPE.to_string(),
        None => GENERAL_TYPE.to_string(),
    };
    if let Some(second) = dirs.get(1) {
        zip = second.clone();
    }

    let location = location_from_filename(&filename);

    Some(
        FileDescriptor::new(path, type_hint)
            .with_zip(zip)
            .with_location(location),
    )
}

fn is_zip_hub(name: &str) -> bool {
    name.len() == 5 && name.bytes().all(|b| b.is_ascii_digit())
}

fn location_from_filename(filename: &str) -> String {
    if let Some(captures) = LOOKUP_LOCATION.captures(filename) {
        return captures[1].to_string();
    }
    filename.replace(".csv", "").replace(LOOKUP_PREFIX, "")
}

/// Load priority: zip hubs, then registry and UCC exports, then the
/// rest, with the large directory exports last.
fn type_tier(type_hint: &str) -> u8 {
    if is_zip_hub(type_hint) {
        0
    } else if type_hint.contains("SB") || type_hint.contains("UCC") {
        1
    } else if type_hint.contains(DIRECTORY_TYPE) {
        3
    } else {
        2
    }
}

fn compare_descriptors(a: &FileDescriptor, b: &FileDescriptor) -> Ordering {
    type_tier(&a.type_hint)
        .cmp(&type_tier(&b.type_hint))
        .then_with(|| a.type_hint.cmp(&b.type_hint))
        .then_with(|| a.path.cmp(&b.path))
}
