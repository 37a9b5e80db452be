//! End-to-end processing of one export: detect, gap-fill, materialize.

use chrono::{Local, NaiveDate};
use lead_model::{FileDescriptor, NormalizedRecord, RawTable};
use tracing::info_span;

use crate::reader::read_raw_table;
use crate::error::Result;
use crate::materialize::materialize;
use crate::schema::{DetectedSchema, SchemaRule, detect_schema, gap_fill};
use crate::scrub::Scrubber;

/// Result of ingesting one file.
#[derive(Debug, Clone, Default)]
pub struct IngestedFile {
    /// Detection outcome; `None` when the table had no non-blank row.
    pub schema: Option<DetectedSchema>,
    /// Index of the first data row in the raw table.
    pub data_start: usize,
    pub records: Vec<NormalizedRecord>,
}

impl IngestedFile {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header names used to build the records.
    pub fn header_names(&self) -> Vec<String> {
        self.schema
            .as_ref()
            .map(DetectedSchema::header_names)
            .unwrap_or_default()
    }
}

/// Scrubs the free-text fields of a manifest entry.
pub fn scrub_descriptor(descriptor: &FileDescriptor, scrubber: &Scrubber) -> FileDescriptor {
    FileDescriptor {
        path: descriptor.path.clone(),
        type_hint: scrubber.scrub(&descriptor.type_hint),
        zip: scrubber.scrub(&descriptor.zip),
        location: scrubber.scrub(&descriptor.location),
        filename: descriptor.filename.clone(),
        category: scrubber.scrub_opt(descriptor.category.as_deref()),
    }
}

/// Ingests a tokenized table, scoring against today's local date.
pub fn ingest_table(
    descriptor: &FileDescriptor,
    table: &RawTable,
    scrubber: &Scrubber,
) -> IngestedFile {
    ingest_table_at(descriptor, table, scrubber, Local::now().date_naive())
}

/// Awaitable form of [`ingest_table`] for sequential multi-file loaders.
///
/// Performs no I/O and never suspends.
pub async fn ingest_table_async(
    descriptor: &FileDescriptor,
    table: &RawTable,
    scrubber: &Scrubber,
) -> IngestedFile {
    ingest_table(descriptor, table, scrubber)
}

/// Ingests a tokenized table, scoring as of `today`.
///
/// Empty and all-blank tables yield no records.
pub fn ingest_table_at(
    descriptor: &FileDescriptor,
    table: &RawTable,
    scrubber: &Scrubber,
    today: NaiveDate,
) -> IngestedFile {
    let span = info_span!(
        "ingest_file",
        file = %descriptor.filename,
        type_hint = %descriptor.type_hint
    );
    let _guard = span.enter();

    let Some(first_index) = table.first_non_blank() else {
        tracing::debug!(rows = table.len(), "no non-blank rows");
        return IngestedFile::default();
    };
    let rows = table.rows();
    let first_row = &rows[first_index];

    let mut schema = detect_schema(&descriptor.type_hint, first_row, scrubber);
    if schema.rule != SchemaRule::HeaderFallback {
        gap_fill(&mut schema.mapping, first_row);
    }

    let data_start = first_index + schema.header_rows;
    let data_rows = rows.get(data_start..).unwrap_or_default();
    let records = materialize(data_rows, &schema.mapping, descriptor, scrubber, today);

    tracing::info!(
        rule = %schema.rule,
        columns = schema.mapping.width(),
        mapped = schema.mapping.mapped_len(),
        offset = data_start,
        records = records.len(),
        "file ingested"
    );

    IngestedFile {
        schema: Some(schema),
        data_start,
        records,
    }
}

/// Reads a CSV export from disk and ingests it.
pub fn load_file(descriptor: &FileDescriptor, scrubber: &Scrubber) -> Result<IngestedFile> {
    let table = read_raw_table(&descriptor.path)?;
    Ok(ingest_table(descriptor, &table, scrubber))
}
