//! Data model shared by the lead intake crates.
//!
//! Raw exports arrive as a [`RawTable`] described by a [`FileDescriptor`].
//! Schema detection turns the first row into a [`ColumnMapping`], and every
//! data row is materialized into a [`NormalizedRecord`] carrying its
//! provenance and a priority score ([`ScoreResult`]).

pub mod descriptor;
pub mod error;
pub mod fields;
pub mod mapping;
pub mod options;
pub mod record;
pub mod score;
pub mod table;

pub use descriptor::FileDescriptor;
pub use error::{ModelError, Result};
pub use mapping::ColumnMapping;
pub use options::{IngestOptions, ScrubRules};
pub use record::{BusinessLead, FieldSource, NormalizedRecord};
pub use score::{ScoreInsight, ScoreResult};
pub use table::RawTable;
