//! Row materialization: mapped, scrubbed, scored records.

use chrono::NaiveDate;
use lead_model::fields::{BUSINESS_NAME, DOCUMENT_NUMBER, LOCATION, ZIP, ZIP_UPPER};
use lead_model::{ColumnMapping, FileDescriptor, NormalizedRecord};
use lead_scoring::score_at;

use crate::scrub::Scrubber;

/// Builds one record per row using `mapping`'s header names.
///
/// Cells past the end of a short row become empty strings; cells past the
/// mapping's width are dropped. Scores are computed as of `today`.
pub fn materialize(
    rows: &[Vec<String>],
    mapping: &ColumnMapping,
    descriptor: &FileDescriptor,
    scrubber: &Scrubber,
    today: NaiveDate,
) -> Vec<NormalizedRecord> {
    let headers = mapping.header_names();
    let mut records: Vec<NormalizedRecord> = rows
        .iter()
        .map(|row| build_record(row, &headers, descriptor, scrubber, today))
        .collect();

    if descriptor.type_hint.contains("SB") {
        let before = records.len();
        let first_header = headers.first().map(String::as_str);
        records.retain(|record| !is_identity_blank(record, first_header));
        let dropped = before - records.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped blank registry rows");
        }
    }

    records
}

fn build_record(
    row: &[String],
    headers: &[String],
    descriptor: &FileDescriptor,
    scrubber: &Scrubber,
    today: NaiveDate,
) -> NormalizedRecord {
    let mut record = NormalizedRecord::new();
    for (index, header) in headers.iter().enumerate() {
        let value = row
            .get(index)
            .map(|cell| scrubber.scrub(cell))
            .unwrap_or_default();
        record.set(header.as_str(), value);
    }

    record.source = descriptor.filename.clone();
    record.type_hint = descriptor.type_hint.clone();
    let zip = first_present(&[
        descriptor.zip.as_str(),
        record.value(ZIP),
        record.value(ZIP_UPPER),
    ]);
    record.zip = scrubber.scrub(zip);
    let location = first_present(&[descriptor.location.as_str(), record.value(LOCATION)]);
    record.location = scrubber.scrub(location);
    record.score = score_at(&record, today).total;
    record
}

fn first_present<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Registry exports end with filler rows that have no name, no document
/// number and nothing in the first column.
fn is_identity_blank(record: &NormalizedRecord, first_header: Option<&str>) -> bool {
    let blank = |name: &str| record.value(name).trim().is_empty();
    blank(BUSINESS_NAME) && blank(DOCUMENT_NUMBER) && first_header.is_none_or(blank)
}
