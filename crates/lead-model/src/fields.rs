//! Canonical field names assigned by schema detection and gap-fill.
//!
//! Names are the keys consumers read from a [`NormalizedRecord`](crate::NormalizedRecord),
//! so they must stay stable across releases.

pub const BUSINESS_NAME: &str = "businessName";
pub const DOCUMENT_NUMBER: &str = "Document Number";
pub const STATUS: &str = "Status";
pub const ZIP: &str = "Zip";
pub const ZIP_UPPER: &str = "ZIP";
pub const LOCATION: &str = "Location";
pub const SUNBIZ_LINK: &str = "Sunbiz Link";
pub const ENTITY_TYPE: &str = "Entity Type";
pub const FEI_EIN: &str = "FEI/EIN";
pub const CATEGORY: &str = "Category";
pub const PHONE: &str = "Phone";
pub const WEBSITE: &str = "Website";

// UCC filing lifecycle
pub const UCC_NUMBER: &str = "UCC Number";
pub const UCC_STATUS: &str = "UCC Status";
pub const DATE_FILED: &str = "Date Filed";
pub const LAPSE_DATE: &str = "Lapse Date";
pub const EXPIRES: &str = "Expires";
pub const FLORIDA_UCC_LINK: &str = "Florida UCC Link";

// Recorder index / recent filings
pub const COUNTERPARTY_NAME: &str = "Counterparty Name";
pub const DIRECT_NAME: &str = "DirectName";
pub const INDIRECT_NAME: &str = "IndirectName";
pub const RECORD_DATE: &str = "Record Date";
pub const DOC_TYPE: &str = "Doc Type";
pub const INSTRUMENT_NUMBER: &str = "Instrument Number";
pub const BOOK_TYPE: &str = "Book Type";
pub const BOOK_PAGE: &str = "Book/Page";
pub const LEGAL_DESCRIPTION: &str = "Legal Description";
pub const CONSIDERATION: &str = "Consideration";
pub const CASE_NUMBER: &str = "Case Number";

// Scraped UCC results
pub const MATCH_SCORE: &str = "Match Score";
pub const FILINGS_COMPLETED_THROUGH: &str = "Filings Completed Through";
pub const FILING_EVENTS: &str = "Filing Events";
pub const SECURED_PARTIES_COUNT: &str = "Secured Parties Count";
pub const DEBTOR_PARTIES_COUNT: &str = "Debtor Parties Count";
pub const DEBTOR_NAME: &str = "Debtor Name";
pub const DEBTOR_ADDRESS: &str = "Debtor Address";
pub const DOCUMENT_TYPE: &str = "Document Type";
pub const DOCUMENT_PAGES: &str = "Document Pages";

// Reserved metadata keys attached during materialization
pub const SOURCE_KEY: &str = "_source";
pub const TYPE_KEY: &str = "_type";
pub const ZIP_KEY: &str = "_zip";
pub const LOCATION_KEY: &str = "_location";
pub const SCORE_KEY: &str = "Score";

pub const RESERVED_KEYS: [&str; 5] = [SOURCE_KEY, TYPE_KEY, ZIP_KEY, LOCATION_KEY, SCORE_KEY];

/// Whether `name` collides with a metadata key written on every record.
pub fn is_reserved_key(name: &str) -> bool {
    RESERVED_KEYS.contains(&name)
}

/// Name of the `n`th secured party name column (1-based).
pub fn secured_party_name(n: usize) -> String {
    format!("Secured Party {n} Name")
}

/// Name of the `n`th secured party address column (1-based).
pub fn secured_party_address(n: usize) -> String {
    format!("Secured Party {n} Address")
}

/// Fallback header for an unmapped column at `index` (0-based).
pub fn synthetic_name(index: usize) -> String {
    format!("Column {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_names_are_one_based() {
        assert_eq!(synthetic_name(0), "Column 1");
        assert_eq!(synthetic_name(41), "Column 42");
    }

    #[test]
    fn test_reserved_keys() {
        assert!(is_reserved_key("Score"));
        assert!(is_reserved_key("_zip"));
        assert!(!is_reserved_key("score"));
        assert!(!is_reserved_key("Zip"));
    }

    #[test]
    fn test_secured_party_names() {
        assert_eq!(secured_party_name(3), "Secured Party 3 Name");
        assert_eq!(secured_party_address(5), "Secured Party 5 Address");
    }
}
