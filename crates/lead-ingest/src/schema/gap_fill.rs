//! Content-based labelling of columns the cascade left unmapped.

use lead_model::ColumnMapping;
use lead_model::fields::{
    CATEGORY, DATE_FILED, DOCUMENT_NUMBER, FEI_EIN, PHONE, STATUS, SUNBIZ_LINK, UCC_STATUS,
};

use crate::predicates::{
    is_category_label, is_date_like, is_document_number, is_entity_status, is_fei_ein,
    is_phone_number, is_registry_link, is_ucc_status,
};

type Probe = (fn(&str) -> bool, &'static str);

/// Probes in evaluation order. Only the first one that matches is tried;
/// if its field name is already held elsewhere the column stays unmapped.
const PROBES: &[Probe] = &[
    (is_date_like, DATE_FILED),
    (is_registry_link, SUNBIZ_LINK),
    (is_ucc_status, UCC_STATUS),
    (is_entity_status, STATUS),
    (is_document_number, DOCUMENT_NUMBER),
    (is_phone_number, PHONE),
    (is_fei_ein, FEI_EIN),
];

/// The category heuristic only applies to the second column, and only when
/// no probe matched.
const CATEGORY_INDEX: usize = 1;

/// Labels unmapped, non-blank columns of `first_row` by content.
///
/// Does nothing when the cascade produced no mapping. Never overwrites an
/// assigned column and never claims a name another column already holds.
/// Returns the number of columns labelled.
pub fn gap_fill(mapping: &mut ColumnMapping, first_row: &[String]) -> usize {
    if mapping.is_empty() {
        return 0;
    }

    let mut filled = 0;
    for (index, cell) in first_row.iter().enumerate().take(mapping.width()) {
        if mapping.is_mapped(index) || cell.trim().is_empty() {
            continue;
        }

        let name = PROBES
            .iter()
            .find(|(matches, _)| matches(cell.as_str()))
            .map(|(_, name)| *name)
            .or_else(|| {
                (index == CATEGORY_INDEX && is_category_label(cell)).then_some(CATEGORY)
            });
        let claimed = name.is_some_and(|name| mapping.claim(index, name));

        if claimed {
            tracing::trace!(index, name = mapping.get(index), "gap-filled column");
            filled += 1;
        }
    }

    if filled > 0 {
        tracing::debug!(filled, "gap-fill labelled columns");
    }
    filled
}
