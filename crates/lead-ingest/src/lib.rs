//! Lead intake from heterogeneous CSV exports.
//!
//! This crate turns headerless, loosely structured exports (registry
//! pulls, UCC filings, recorder indexes, directory listings) into
//! uniform, scored records.
//!
//! # Pipeline
//!
//! - **Scrub**: normalize every cell and redact the directory brand
//! - **Detect**: pick a column mapping from the type hint and first row
//! - **Gap-fill**: name still-unmapped columns from their content
//! - **Materialize**: build records, apply file hints, score
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lead_ingest::{Scrubber, load_file, load_manifest};
//!
//! let scrubber = Scrubber::default();
//! for descriptor in load_manifest(Path::new("public/manifest.json"), &scrubber)? {
//!     let file = load_file(&descriptor, &scrubber)?;
//!     println!("{}: {} records", descriptor.filename, file.records.len());
//! }
//! ```

mod discovery;
mod error;
mod manifest;
mod materialize;
mod pipeline;
pub mod predicates;
mod reader;
pub mod schema;
mod scrub;

// === Error Types ===
pub use error::{IngestError, Result};

// === Input Adapters ===
pub use discovery::{GENERAL_TYPE, discover_files};
pub use manifest::{load_manifest, parse_manifest};
pub use reader::{parse_raw_table, read_raw_table};

// === Core ===
pub use materialize::materialize;
pub use schema::{DetectedSchema, SchemaRule, SchemaWarning, detect_schema, gap_fill};
pub use scrub::{Scrubber, scrub};

// === Pipeline ===
pub use pipeline::{
    IngestedFile, ingest_table, ingest_table_async, ingest_table_at, load_file, scrub_descriptor,
};
