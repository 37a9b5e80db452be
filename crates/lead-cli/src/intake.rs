//! Multi-file intake: resolve the source, ingest each file in turn, rank.

use std::cmp::Reverse;
use std::path::Path;

use lead_ingest::{SchemaRule, SchemaWarning, Scrubber, discover_files, load_file, load_manifest};
use lead_model::{FileDescriptor, NormalizedRecord};
use tracing::{info, info_span};

/// Outcome of one file.
#[derive(Debug, Clone, Default)]
pub struct FileSummary {
    pub filename: String,
    pub type_hint: String,
    pub rule: Option<SchemaRule>,
    pub warning: Option<SchemaWarning>,
    pub records: usize,
    /// Read or parse failure; the file contributed no records.
    pub error: Option<String>,
}

impl FileSummary {
    fn new(descriptor: &FileDescriptor) -> Self {
        Self {
            filename: descriptor.filename.clone(),
            type_hint: descriptor.type_hint.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct IntakeResult {
    pub files: Vec<FileSummary>,
    pub records: Vec<NormalizedRecord>,
}

impl IntakeResult {
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.error.is_some())
    }

    pub fn low_confidence_files(&self) -> usize {
        self.files.iter().filter(|file| file.warning.is_some()).count()
    }
}

/// Lists the files to ingest: a directory is walked, anything else is
/// read as a manifest.
pub fn resolve_sources(
    source: &Path,
    scrubber: &Scrubber,
) -> lead_ingest::Result<Vec<FileDescriptor>> {
    if source.is_dir() {
        discover_files(source, scrubber)
    } else {
        load_manifest(source, scrubber)
    }
}

/// Ingests `descriptors` sequentially. A file that cannot be read is
/// reported and skipped; the remaining files still load.
///
/// `on_file` runs before each file, for progress reporting.
pub fn ingest_sources<F>(
    descriptors: &[FileDescriptor],
    scrubber: &Scrubber,
    mut on_file: F,
) -> IntakeResult
where
    F: FnMut(&FileDescriptor),
{
    let span = info_span!("intake", files = descriptors.len());
    let _guard = span.enter();

    let mut result = IntakeResult::default();
    for descriptor in descriptors {
        on_file(descriptor);
        let mut summary = FileSummary::new(descriptor);
        match load_file(descriptor, scrubber) {
            Ok(file) => {
                summary.rule = file.schema.as_ref().map(|schema| schema.rule);
                summary.warning = file.schema.as_ref().and_then(|schema| schema.warning);
                summary.records = file.records.len();
                result.records.extend(file.records);
            }
            Err(error) => {
                tracing::error!(file = %descriptor.filename, %error, "failed to load file");
                summary.error = Some(error.to_string());
            }
        }
        result.files.push(summary);
    }

    info!(
        files = result.files.len(),
        records = result.records.len(),
        "intake complete"
    );
    result
}

/// Drops records scoring below `min_score`.
pub fn retain_min_score(records: &mut Vec<NormalizedRecord>, min_score: u8) {
    records.retain(|record| record.score >= min_score);
}

/// Records by descending score; equal scores keep load order.
pub fn rank(records: &[NormalizedRecord]) -> Vec<&NormalizedRecord> {
    let mut ranked: Vec<&NormalizedRecord> = records.iter().collect();
    ranked.sort_by_key(|record| Reverse(record.score));
    ranked
}
