//! The detection cascade.

use lead_model::ColumnMapping;
use lead_model::fields::{secured_party_address, secured_party_name};

use super::layouts::{
    DIRECTORY, DIRECTORY_MIN_WIDTH, ENRICHED_CONTACT, ENRICHED_REGISTRY, ENRICHED_WIDTH, Layout,
    MASTER_SHEET, MASTER_SHEET_WIDTH, RECENT_FILINGS, RECENT_FILINGS_WIDTHS, RECORDER_INDEX,
    SUNBIZ_CORE, UCC_EXPORT_CORE, UCC_LIFECYCLE, UCC_MIN_WIDTH, UCC_RESULTS_LEADING,
    UCC_RESULTS_PARTY_SLOTS, UCC_RESULTS_PARTY_START, UCC_RESULTS_TRAILING,
};
use super::{DetectedSchema, SchemaRule, SchemaWarning};
use crate::predicates::{
    is_long_digit_run, is_phone_number, is_registry_link, looks_like_contact,
};
use crate::scrub::Scrubber;

/// What a rule sees: the file's type hint and its first non-blank row.
struct FirstRow<'a> {
    type_hint: &'a str,
    cells: &'a [String],
}

impl FirstRow<'_> {
    fn width(&self) -> usize {
        self.cells.len()
    }

    fn any_cell(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.cells.iter().any(|cell| predicate(cell.as_str()))
    }
}

struct RuleMatch {
    mapping: ColumnMapping,
    header_rows: usize,
    warning: Option<SchemaWarning>,
}

impl RuleMatch {
    fn fixed(mapping: ColumnMapping) -> Self {
        Self {
            mapping,
            header_rows: 0,
            warning: None,
        }
    }

    fn with_header(mapping: ColumnMapping) -> Self {
        Self {
            header_rows: 1,
            ..Self::fixed(mapping)
        }
    }
}

type RuleFn = fn(&FirstRow<'_>) -> Option<RuleMatch>;

/// Conditional rules in priority order; [`header_fallback`] closes the cascade.
const CASCADE: &[(SchemaRule, RuleFn)] = &[
    (SchemaRule::MasterSheet, master_sheet),
    (SchemaRule::Sunbiz, sunbiz),
    (SchemaRule::UccExport, ucc_export),
    (SchemaRule::RecentFilings, recent_filings),
    (SchemaRule::RecorderIndex, recorder_index),
    (SchemaRule::UccResults, ucc_results),
    (SchemaRule::EnrichedByZip, enriched_by_zip),
    (SchemaRule::Directory, directory),
];

/// Runs the cascade over the first non-blank row of a file.
///
/// `scrubber` cleans literal header text when no structural rule applies.
pub fn detect_schema(
    type_hint: &str,
    first_row: &[String],
    scrubber: &Scrubber,
) -> DetectedSchema {
    let row = FirstRow {
        type_hint,
        cells: first_row,
    };

    let (rule, matched) = CASCADE
        .iter()
        .find_map(|(rule, check)| check(&row).map(|matched| (*rule, matched)))
        .unwrap_or_else(|| (SchemaRule::HeaderFallback, header_fallback(&row, scrubber)));

    tracing::debug!(
        rule = %rule,
        columns = row.width(),
        mapped = matched.mapping.mapped_len(),
        header_rows = matched.header_rows,
        "schema detected"
    );
    if let Some(warning) = matched.warning {
        tracing::warn!(rule = %rule, type_hint, columns = row.width(), "{warning}");
    }

    DetectedSchema {
        rule,
        mapping: matched.mapping,
        header_rows: matched.header_rows,
        warning: matched.warning,
    }
}

fn layout(width: usize, layouts: &[Layout]) -> ColumnMapping {
    ColumnMapping::from_pairs(width, layouts.iter().flat_map(|layout| layout.iter().copied()))
}

fn master_sheet(row: &FirstRow<'_>) -> Option<RuleMatch> {
    (row.width() == MASTER_SHEET_WIDTH)
        .then(|| RuleMatch::fixed(layout(row.width(), &[MASTER_SHEET])))
}

fn sunbiz(row: &FirstRow<'_>) -> Option<RuleMatch> {
    if !row.type_hint.contains("SB") {
        return None;
    }
    let mapping = if row.width() >= UCC_MIN_WIDTH {
        layout(row.width(), &[SUNBIZ_CORE, UCC_LIFECYCLE])
    } else {
        layout(row.width(), &[SUNBIZ_CORE])
    };
    Some(RuleMatch::fixed(mapping))
}

fn ucc_export(row: &FirstRow<'_>) -> Option<RuleMatch> {
    (row.type_hint.contains("UCC") && row.width() >= UCC_MIN_WIDTH)
        .then(|| RuleMatch::fixed(layout(row.width(), &[UCC_EXPORT_CORE, UCC_LIFECYCLE])))
}

fn recent_filings(row: &FirstRow<'_>) -> Option<RuleMatch> {
    RECENT_FILINGS_WIDTHS
        .contains(&row.width())
        .then(|| RuleMatch::with_header(layout(row.width(), &[RECENT_FILINGS])))
}

fn recorder_index(row: &FirstRow<'_>) -> Option<RuleMatch> {
    matches!(row.type_hint, "Search Results" | "B UCC")
        .then(|| RuleMatch::with_header(layout(row.width(), &[RECORDER_INDEX])))
}

fn ucc_results(row: &FirstRow<'_>) -> Option<RuleMatch> {
    if row.type_hint != "UCC Results" {
        return None;
    }
    let mut mapping = layout(row.width(), &[UCC_RESULTS_LEADING]);
    for slot in 0..UCC_RESULTS_PARTY_SLOTS {
        let name_index = UCC_RESULTS_PARTY_START + slot * 2;
        mapping.assign(name_index, secured_party_name(slot + 1));
        mapping.assign(name_index + 1, secured_party_address(slot + 1));
    }
    let trailing_start = UCC_RESULTS_PARTY_START + UCC_RESULTS_PARTY_SLOTS * 2;
    for (offset, name) in UCC_RESULTS_TRAILING {
        mapping.assign(trailing_start + offset, *name);
    }
    Some(RuleMatch::with_header(mapping))
}

fn enriched_by_zip(row: &FirstRow<'_>) -> Option<RuleMatch> {
    if row.width() != ENRICHED_WIDTH {
        return None;
    }
    let matched = if row.any_cell(is_registry_link) {
        RuleMatch::fixed(layout(row.width(), &[ENRICHED_REGISTRY]))
    } else if row.any_cell(is_phone_number) {
        RuleMatch::fixed(layout(row.width(), &[ENRICHED_CONTACT]))
    } else {
        RuleMatch {
            warning: Some(SchemaWarning::NoContentSignal),
            ..RuleMatch::fixed(ColumnMapping::with_width(row.width()))
        }
    };
    Some(matched)
}

fn directory(row: &FirstRow<'_>) -> Option<RuleMatch> {
    if row.width() < DIRECTORY_MIN_WIDTH {
        return None;
    }
    let mapping = layout(row.width(), &[DIRECTORY]);
    if row.any_cell(looks_like_contact) {
        Some(RuleMatch::fixed(mapping))
    } else {
        Some(RuleMatch::with_header(mapping))
    }
}

/// Takes the first row as literal header text when it carries no data
/// signal; otherwise every column stays synthetic.
fn header_fallback(row: &FirstRow<'_>, scrubber: &Scrubber) -> RuleMatch {
    let is_data = row.any_cell(|cell| looks_like_contact(cell) || is_long_digit_run(cell));
    let mut mapping = ColumnMapping::with_width(row.width());
    if is_data {
        return RuleMatch {
            warning: Some(SchemaWarning::UnlabeledColumns),
            ..RuleMatch::fixed(mapping)
        };
    }
    for (index, cell) in row.cells.iter().enumerate() {
        let name = scrubber.scrub(cell);
        if !name.is_empty() {
            mapping.assign(index, name);
        }
    }
    RuleMatch::with_header(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn blank_row(width: usize) -> Vec<String> {
        vec![String::new(); width]
    }

    fn row<'a>(type_hint: &'a str, cells: &'a [String]) -> FirstRow<'a> {
        FirstRow { type_hint, cells }
    }

    #[test]
    fn test_master_sheet_needs_exactly_56_columns() {
        let wide = blank_row(56);
        let matched = master_sheet(&row("", &wide)).unwrap();
        assert_eq!(matched.mapping.mapped_len(), 13);
        assert_eq!(matched.mapping.get(0), Some("businessName"));
        assert_eq!(matched.mapping.get(55), Some("Florida UCC Link"));
        assert!(master_sheet(&row("", &blank_row(55))).is_none());
    }

    #[test]
    fn test_sunbiz_adds_lifecycle_block_when_wide() {
        let narrow = blank_row(6);
        let matched = sunbiz(&row("1. SB", &narrow)).unwrap();
        assert_eq!(matched.mapping.mapped_len(), 5);
        assert_eq!(matched.mapping.get(1), Some("Document Number"));

        let wide = blank_row(52);
        let matched = sunbiz(&row("SB", &wide)).unwrap();
        assert_eq!(matched.mapping.mapped_len(), 10);
        assert_eq!(matched.mapping.get(44), Some("Expires"));

        assert!(sunbiz(&row("UCC", &narrow)).is_none());
    }

    #[test]
    fn test_ucc_export_has_no_document_number() {
        let wide = blank_row(50);
        let matched = ucc_export(&row("3. UCC", &wide)).unwrap();
        assert!(!matched.mapping.contains_name("Document Number"));
        assert_eq!(matched.mapping.get(41), Some("UCC Status"));
        assert!(ucc_export(&row("3. UCC", &blank_row(49))).is_none());
    }

    #[test]
    fn test_recent_filings_skip_a_header_row() {
        for width in [25, 29] {
            let cells = blank_row(width);
            let matched = recent_filings(&row("", &cells)).unwrap();
            assert_eq!(matched.header_rows, 1);
            assert_eq!(matched.mapping.mapped_len(), 8);
        }
        assert!(recent_filings(&row("", &blank_row(30))).is_none());
    }

    #[test]
    fn test_recorder_index_matches_exact_type_hints() {
        let cells = blank_row(12);
        let matched = recorder_index(&row("B UCC", &cells)).unwrap();
        assert_eq!(matched.mapping.get(2), Some("DirectName"));
        assert_eq!(matched.mapping.mapped_len(), 10);
        assert!(recorder_index(&row("Search Results", &cells)).is_some());
        assert!(recorder_index(&row("Search Results 2", &cells)).is_none());
    }

    #[test]
    fn test_ucc_results_repeats_secured_parties() {
        let cells = blank_row(24);
        let matched = ucc_results(&row("UCC Results", &cells)).unwrap();
        let mapping = &matched.mapping;
        assert_eq!(mapping.get(9), Some("Secured Party 1 Name"));
        assert_eq!(mapping.get(10), Some("Secured Party 1 Address"));
        assert_eq!(mapping.get(17), Some("Secured Party 5 Name"));
        assert_eq!(mapping.get(18), Some("Secured Party 5 Address"));
        assert_eq!(mapping.get(19), Some("Debtor Parties Count"));
        assert_eq!(mapping.get(23), Some("Document Pages"));
        assert_eq!(mapping.mapped_len(), 24);
        assert_eq!(matched.header_rows, 1);
    }

    #[test]
    fn test_enriched_by_zip_sniffs_content() {
        let registry = cells(&[
            "Acme LLC",
            "ACTIVE",
            "59-1234567",
            "https://search.sunbiz.org/x",
            "FILED",
            "1/2/2024",
            "1/2/2029",
            "https://floridaucc.com/y",
        ]);
        let matched = enriched_by_zip(&row("", &registry)).unwrap();
        assert_eq!(matched.mapping.get(3), Some("Sunbiz Link"));
        assert!(matched.warning.is_none());

        let contact = cells(&[
            "Acme LLC",
            "305-555-0100",
            "acme.com",
            "FILED",
            "1/2/2024",
            "1/2/2029",
            "https://floridaucc.com/y",
            "Plumbing",
        ]);
        let matched = enriched_by_zip(&row("", &contact)).unwrap();
        assert_eq!(matched.mapping.get(1), Some("Phone"));
        assert_eq!(matched.mapping.get(7), Some("Category"));

        let neither = cells(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let matched = enriched_by_zip(&row("", &neither)).unwrap();
        assert!(matched.mapping.is_empty());
        assert_eq!(matched.warning, Some(SchemaWarning::NoContentSignal));
    }

    #[test]
    fn test_directory_detects_header_rows() {
        let data = cells(&["Plumbing", "Pg1", "John Doe", "555-1234", "http://example.com"]);
        let matched = directory(&row("", &data)).unwrap();
        assert_eq!(matched.header_rows, 0);
        assert_eq!(matched.mapping.get(2), Some("businessName"));

        let header = cells(&["Category", "Page", "Name", "Phone", "Website"]);
        assert_eq!(directory(&row("", &header)).unwrap().header_rows, 1);
        assert!(directory(&row("", &blank_row(4))).is_none());
    }

    #[test]
    fn test_header_fallback_uses_literal_headers() {
        let header = cells(&["Name", "", "Joe&#39;s  Note"]);
        let matched = header_fallback(&row("Generic", &header), &Scrubber::default());
        assert_eq!(matched.header_rows, 1);
        assert_eq!(
            matched.mapping.header_names(),
            vec!["Name", "Column 2", "Joe's Note"]
        );
    }

    #[test]
    fn test_header_fallback_on_data_row_is_synthetic() {
        let data = cells(&["John Doe", "555-123-4567"]);
        let matched = header_fallback(&row("Generic", &data), &Scrubber::default());
        assert_eq!(matched.header_rows, 0);
        assert!(matched.mapping.is_empty());
        assert_eq!(matched.warning, Some(SchemaWarning::UnlabeledColumns));

        let ids = cells(&["1234567", "x"]);
        let matched = header_fallback(&row("", &ids), &Scrubber::default());
        assert_eq!(matched.header_rows, 0);
    }

    #[test]
    fn test_cascade_order_wins_over_later_rules() {
        let wide = blank_row(56);
        let detected = detect_schema("SB", &wide, &Scrubber::default());
        assert_eq!(detected.rule, SchemaRule::MasterSheet);

        let filings = blank_row(26);
        let detected = detect_schema("Search Results", &filings, &Scrubber::default());
        assert_eq!(detected.rule, SchemaRule::RecentFilings);
    }
}
