//! Stateless cell classifiers.
//!
//! Every predicate trims its input and has no side effects.

use std::sync::LazyLock;

use regex::Regex;

static ZIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").expect("Invalid zip regex"));

/// `555-123-4567`, `555.123.4567`, `555 123 4567`, `(555) 123-4567`.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\(\d{3}\)\s?|\d{3}[-.\s])\d{3}[-.\s]\d{4}$").expect("Invalid phone regex")
});

/// Unanchored phone shape used by header sniffing.
static LOOSE_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}\D\d{3}\D\d{4}").expect("Invalid loose phone regex"));

static DOCUMENT_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z]\d{5,}|\d{10,12})$").expect("Invalid document number regex")
});

static DATE_LIKE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}\b").expect("Invalid date-like regex")
});

static FEI_EIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{2}-\d{7}|\d{9})$").expect("Invalid FEI/EIN regex"));

const UCC_STATUS_PREFIXES: &[&str] = &["FILED", "LAPSED"];
const ENTITY_STATUS_PREFIXES: &[&str] = &["ACTIVE", "INACT", "DISS", "DELQ", "UA"];
const PLACEHOLDER_EINS: &[&str] = &["00-0000000", "000000000"];
const REGISTRY_HOST: &str = "sunbiz.org";
const LONG_DIGIT_RUN: usize = 5;
const CATEGORY_MIN_LEN: usize = 5;

/// Five-digit zip, optionally with a `-NNNN` extension.
pub fn is_zip_code(value: &str) -> bool {
    ZIP_REGEX.is_match(value.trim())
}

/// Loose US phone number across the whole cell.
pub fn is_phone_number(value: &str) -> bool {
    PHONE_REGEX.is_match(value.trim())
}

/// One letter followed by at least five digits, or a bare 10-12 digit numeral.
pub fn is_document_number(value: &str) -> bool {
    DOCUMENT_NUMBER_REGEX.is_match(value.trim())
}

/// `M/D/YY` through `MM/DD/YYYY`, possibly followed by a time.
pub fn is_date_like(value: &str) -> bool {
    DATE_LIKE_REGEX.is_match(value.trim())
}

/// UCC filing status such as `FILED` or `LAPSED - 01/01/2020`.
pub fn is_ucc_status(value: &str) -> bool {
    let upper = value.trim().to_uppercase();
    UCC_STATUS_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}

/// Corporate registry status codes (`ACTIVE`, `INACT/UA`, `DISS`, ...).
pub fn is_entity_status(value: &str) -> bool {
    let trimmed = value.trim();
    ENTITY_STATUS_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Federal employer id, excluding the all-zero placeholder.
pub fn is_fei_ein(value: &str) -> bool {
    let trimmed = value.trim();
    FEI_EIN_REGEX.is_match(trimmed) && !PLACEHOLDER_EINS.contains(&trimmed)
}

/// Link into the Florida corporate registry.
pub fn is_registry_link(value: &str) -> bool {
    value.trim().to_lowercase().contains(REGISTRY_HOST)
}

/// Web address marker (`http` or `www.`).
pub fn is_url_like(value: &str) -> bool {
    let lower = value.trim().to_lowercase();
    lower.contains("http") || lower.contains("www.")
}

/// Free text that reads like a category label: longer than five
/// characters, no digits, no commas.
pub fn is_category_label(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().count() > CATEGORY_MIN_LEN
        && !trimmed.chars().any(|c| c.is_ascii_digit())
        && !trimmed.contains(',')
}

/// Cell carries contact data: a phone shape anywhere, or a web address.
pub fn looks_like_contact(value: &str) -> bool {
    LOOSE_PHONE_REGEX.is_match(value) || is_url_like(value)
}

/// A pure digit run longer than five characters (ids, account numbers).
pub fn is_long_digit_run(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.len() > LONG_DIGIT_RUN && trimmed.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_codes() {
        assert!(is_zip_code("33101"));
        assert!(is_zip_code(" 33101-1234 "));
        assert!(!is_zip_code("3310"));
        assert!(!is_zip_code("33101-12"));
        assert!(!is_zip_code("331011"));
    }

    #[test]
    fn test_phone_numbers() {
        assert!(is_phone_number("555-123-4567"));
        assert!(is_phone_number("555.123.4567"));
        assert!(is_phone_number("(555) 123-4567"));
        assert!(is_phone_number("(555)123-4567"));
        assert!(!is_phone_number("555-1234"));
        assert!(!is_phone_number("5551234567"));
        assert!(!is_phone_number("call 555-123-4567"));
    }

    #[test]
    fn test_document_numbers() {
        assert!(is_document_number("P12000012345"));
        assert!(is_document_number("L21000"));
        assert!(is_document_number("1234567890"));
        assert!(!is_document_number("L2100"));
        assert!(!is_document_number("123456789"));
        assert!(!is_document_number("1234567890123"));
    }

    #[test]
    fn test_dates() {
        assert!(is_date_like("3/7/2025"));
        assert!(is_date_like("03/07/25"));
        assert!(is_date_like("3/7/2025 12:00 AM"));
        assert!(!is_date_like("2025-03-07"));
        assert!(!is_date_like("Filed 3/7/2025"));
    }

    #[test]
    fn test_statuses() {
        assert!(is_ucc_status("FILED"));
        assert!(is_ucc_status("lapsed - 01/01/2020"));
        assert!(!is_ucc_status("ACTIVE"));
        assert!(is_entity_status("ACTIVE"));
        assert!(is_entity_status("INACT/UA"));
        assert!(is_entity_status("DELQ"));
        assert!(!is_entity_status("FILED"));
    }

    #[test]
    fn test_fei_ein() {
        assert!(is_fei_ein("59-1234567"));
        assert!(is_fei_ein("591234567"));
        assert!(!is_fei_ein("00-0000000"));
        assert!(!is_fei_ein("000000000"));
        assert!(!is_fei_ein("5912345678"));
    }

    #[test]
    fn test_links_and_contacts() {
        assert!(is_registry_link("https://search.SUNBIZ.org/Inquiry"));
        assert!(!is_registry_link("https://example.com"));
        assert!(is_url_like("WWW.EXAMPLE.COM"));
        assert!(looks_like_contact("Call 555-123-4567 today"));
        assert!(looks_like_contact("http://example.com"));
        assert!(!looks_like_contact("Business Name"));
    }

    #[test]
    fn test_category_labels() {
        assert!(is_category_label("Plumbing Contractors"));
        assert!(!is_category_label("Plumb"));
        assert!(!is_category_label("Plumbing, Heating"));
        assert!(!is_category_label("Pg1234"));
    }

    #[test]
    fn test_long_digit_runs() {
        assert!(is_long_digit_run("123456"));
        assert!(!is_long_digit_run("12345"));
        assert!(!is_long_digit_run("12345a"));
    }
}
