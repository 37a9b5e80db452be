//! Fixed column layouts for the known export formats.

use lead_model::fields::{
    BOOK_PAGE, BOOK_TYPE, BUSINESS_NAME, CASE_NUMBER, CATEGORY, CONSIDERATION, COUNTERPARTY_NAME,
    DATE_FILED, DEBTOR_ADDRESS, DEBTOR_NAME, DEBTOR_PARTIES_COUNT, DIRECT_NAME, DOC_TYPE,
    DOCUMENT_NUMBER, DOCUMENT_PAGES, DOCUMENT_TYPE, ENTITY_TYPE, EXPIRES, FEI_EIN,
    FILING_EVENTS, FILINGS_COMPLETED_THROUGH, FLORIDA_UCC_LINK, INDIRECT_NAME,
    INSTRUMENT_NUMBER, LAPSE_DATE, LEGAL_DESCRIPTION, LOCATION, MATCH_SCORE, PHONE,
    RECORD_DATE, SECURED_PARTIES_COUNT, STATUS, SUNBIZ_LINK, UCC_NUMBER, UCC_STATUS, WEBSITE,
    ZIP,
};

pub(crate) type Layout = &'static [(usize, &'static str)];

pub(crate) const MASTER_SHEET_WIDTH: usize = 56;
pub(crate) const UCC_MIN_WIDTH: usize = 50;
pub(crate) const RECENT_FILINGS_WIDTHS: std::ops::RangeInclusive<usize> = 25..=29;
pub(crate) const ENRICHED_WIDTH: usize = 8;
pub(crate) const DIRECTORY_MIN_WIDTH: usize = 5;

/// UCC filing lifecycle block shared by the wide exports.
pub(crate) const UCC_LIFECYCLE: Layout = &[
    (38, UCC_NUMBER),
    (41, UCC_STATUS),
    (42, DATE_FILED),
    (43, LAPSE_DATE),
    (44, EXPIRES),
];

pub(crate) const MASTER_SHEET: Layout = &[
    (0, BUSINESS_NAME),
    (1, DOCUMENT_NUMBER),
    (2, STATUS),
    (6, ZIP),
    (7, SUNBIZ_LINK),
    (8, ENTITY_TYPE),
    (9, FEI_EIN),
    (38, UCC_NUMBER),
    (41, UCC_STATUS),
    (42, DATE_FILED),
    (43, LAPSE_DATE),
    (44, EXPIRES),
    (55, FLORIDA_UCC_LINK),
];

pub(crate) const SUNBIZ_CORE: Layout = &[
    (0, BUSINESS_NAME),
    (1, DOCUMENT_NUMBER),
    (2, STATUS),
    (3, ENTITY_TYPE),
    (4, FEI_EIN),
];

/// Wide UCC export: same positions as the master sheet, no document number.
pub(crate) const UCC_EXPORT_CORE: Layout = &[
    (0, BUSINESS_NAME),
    (2, STATUS),
    (8, ENTITY_TYPE),
    (9, FEI_EIN),
];

pub(crate) const RECENT_FILINGS: Layout = &[
    (0, STATUS),
    (2, BUSINESS_NAME),
    (3, COUNTERPARTY_NAME),
    (4, RECORD_DATE),
    (5, LOCATION),
    (6, DOC_TYPE),
    (7, INSTRUMENT_NUMBER),
    (11, LEGAL_DESCRIPTION),
];

/// Clerk recorder search grid; columns 0 and 1 are select/detail controls.
pub(crate) const RECORDER_INDEX: Layout = &[
    (2, DIRECT_NAME),
    (3, INDIRECT_NAME),
    (4, RECORD_DATE),
    (5, DOC_TYPE),
    (6, INSTRUMENT_NUMBER),
    (7, BOOK_TYPE),
    (8, BOOK_PAGE),
    (9, LEGAL_DESCRIPTION),
    (10, CONSIDERATION),
    (11, CASE_NUMBER),
];

pub(crate) const UCC_RESULTS_LEADING: Layout = &[
    (0, BUSINESS_NAME),
    (1, MATCH_SCORE),
    (2, STATUS),
    (3, DATE_FILED),
    (4, EXPIRES),
    (5, FILINGS_COMPLETED_THROUGH),
    (6, UCC_NUMBER),
    (7, FILING_EVENTS),
    (8, SECURED_PARTIES_COUNT),
];

/// Secured parties repeat as (name, address) pairs starting here.
pub(crate) const UCC_RESULTS_PARTY_START: usize = 9;
pub(crate) const UCC_RESULTS_PARTY_SLOTS: usize = 5;

/// Offsets past the last secured party pair.
pub(crate) const UCC_RESULTS_TRAILING: &[(usize, &str)] = &[
    (0, DEBTOR_PARTIES_COUNT),
    (1, DEBTOR_NAME),
    (2, DEBTOR_ADDRESS),
    (3, DOCUMENT_TYPE),
    (4, DOCUMENT_PAGES),
];

pub(crate) const ENRICHED_REGISTRY: Layout = &[
    (1, STATUS),
    (2, FEI_EIN),
    (3, SUNBIZ_LINK),
    (4, UCC_STATUS),
    (5, DATE_FILED),
    (6, EXPIRES),
    (7, FLORIDA_UCC_LINK),
];

pub(crate) const ENRICHED_CONTACT: Layout = &[
    (1, PHONE),
    (2, WEBSITE),
    (3, UCC_STATUS),
    (4, DATE_FILED),
    (5, EXPIRES),
    (6, FLORIDA_UCC_LINK),
    (7, CATEGORY),
];

pub(crate) const DIRECTORY: Layout = &[
    (0, CATEGORY),
    (2, BUSINESS_NAME),
    (3, PHONE),
    (4, WEBSITE),
];
