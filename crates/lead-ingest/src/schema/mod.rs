//! Schema detection for header-less exports.
//!
//! Exports carry no reliable header row, so the schema is inferred from the
//! file's type hint, its column count and the content of its first
//! non-blank row. Detection is a strict cascade: rules are evaluated in
//! priority order and the first match wins (see [`SchemaRule::ALL`]).
//! A gap-fill pass ([`gap_fill`]) then labels columns the cascade left open.

mod gap_fill;
mod layouts;
mod rules;

use std::fmt;

use lead_model::ColumnMapping;
use serde::Serialize;

pub use gap_fill::gap_fill;
pub use rules::detect_schema;

/// Cascade rules in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaRule {
    /// Exactly 56 columns: the master sheet.
    MasterSheet,
    /// Type hint contains `SB`: corporate registry export.
    Sunbiz,
    /// Type hint contains `UCC` and 50+ columns.
    UccExport,
    /// 25-29 columns: recent filings with a header row.
    RecentFilings,
    /// Type hint `Search Results` or `B UCC`: recorder index.
    RecorderIndex,
    /// Type hint `UCC Results`: scraped UCC search results.
    UccResults,
    /// Exactly 8 columns: enriched-by-zip, chosen by content.
    EnrichedByZip,
    /// 5+ columns: business directory.
    Directory,
    /// Nothing matched: first row taken as literal headers.
    HeaderFallback,
}

impl SchemaRule {
    /// All rules, in evaluation order.
    pub const ALL: [SchemaRule; 9] = [
        Self::MasterSheet,
        Self::Sunbiz,
        Self::UccExport,
        Self::RecentFilings,
        Self::RecorderIndex,
        Self::UccResults,
        Self::EnrichedByZip,
        Self::Directory,
        Self::HeaderFallback,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MasterSheet => "master_sheet",
            Self::Sunbiz => "sunbiz",
            Self::UccExport => "ucc_export",
            Self::RecentFilings => "recent_filings",
            Self::RecorderIndex => "recorder_index",
            Self::UccResults => "ucc_results",
            Self::EnrichedByZip => "enriched_by_zip",
            Self::Directory => "directory",
            Self::HeaderFallback => "header_fallback",
        }
    }

    /// The condition under which the rule fires.
    #[must_use]
    pub const fn condition(&self) -> &'static str {
        match self {
            Self::MasterSheet => "exactly 56 columns",
            Self::Sunbiz => "type hint contains \"SB\"",
            Self::UccExport => "type hint contains \"UCC\" and 50+ columns",
            Self::RecentFilings => "25-29 columns",
            Self::RecorderIndex => "type hint is \"Search Results\" or \"B UCC\"",
            Self::UccResults => "type hint is \"UCC Results\"",
            Self::EnrichedByZip => "exactly 8 columns",
            Self::Directory => "5+ columns",
            Self::HeaderFallback => "always",
        }
    }
}

impl fmt::Display for SchemaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reasons a detected mapping should be treated as low confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaWarning {
    /// 8-column file with neither a registry link nor a phone number.
    NoContentSignal,
    /// No rule matched and the first row is data, so every column is synthetic.
    UnlabeledColumns,
}

impl SchemaWarning {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoContentSignal => {
                "8-column file has no registry link or phone number; columns left unmapped"
            }
            Self::UnlabeledColumns => "no schema matched and first row is data; columns unnamed",
        }
    }
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of running the cascade on one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSchema {
    /// Rule that matched.
    pub rule: SchemaRule,
    /// Column index to field name mapping.
    pub mapping: ColumnMapping,
    /// Rows to skip after the first non-blank row (header rows).
    pub header_rows: usize,
    pub warning: Option<SchemaWarning>,
}

impl DetectedSchema {
    /// Full header list, with `Column N` for unmapped columns.
    pub fn header_names(&self) -> Vec<String> {
        self.mapping.header_names()
    }

    pub fn is_low_confidence(&self) -> bool {
        self.warning.is_some()
    }
}
