//! Header-agnostic CSV tokenizer.
//!
//! Exports have no reliable header row and no fixed width, so every line
//! is read as data: rows may be ragged, a UTF-8 BOM is dropped, invalid
//! UTF-8 is replaced lossily, and blank lines are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lead_model::RawTable;
use lead_model::table::is_blank_row;

use crate::error::{IngestError, Result};

/// Reads a CSV file into a [`RawTable`].
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let table = parse_raw_table(file).map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), rows = table.len(), "tokenized CSV");
    Ok(table)
}

/// Tokenizes CSV from any reader.
pub fn parse_raw_table<R: Read>(reader: R) -> csv::Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record?;
        let mut row: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        if rows.is_empty()
            && let Some(first) = row.first_mut()
            && let Some(stripped) = first.strip_prefix('\u{feff}')
        {
            *first = stripped.to_string();
        }
        if !is_blank_row(&row) {
            rows.push(row);
        }
    }

    Ok(RawTable::new(rows))
}
