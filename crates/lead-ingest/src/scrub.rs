//! Cell-level value scrubbing.
//!
//! Applied to every cell and to the free-text fields of each file
//! descriptor. The rules, in order:
//!
//! 1. A value that mentions the redacted brand token *and* looks like a
//!    link is replaced wholesale by the placeholder URL.
//! 2. Otherwise every occurrence of the brand token is removed and
//!    whitespace runs collapse to a single space (trimmed).
//! 3. `&amp;` and `&#39;` are decoded. No other entities are touched.
//!
//! The rules repeat until the value stops changing, which makes
//! `scrub(scrub(x)) == scrub(x)` hold for every input.

use lead_model::ScrubRules;
use regex::{Regex, RegexBuilder};

const LINK_MARKERS: &[&str] = &["http", "www.", ".com", ".org", ".net"];

/// Compiled scrub rules.
#[derive(Debug, Clone)]
pub struct Scrubber {
    brand: Option<Regex>,
    placeholder_url: String,
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new(&ScrubRules::default())
    }
}

impl Scrubber {
    pub fn new(rules: &ScrubRules) -> Self {
        let token = rules.brand_token.trim();
        let brand = if token.is_empty() {
            None
        } else {
            RegexBuilder::new(&regex::escape(token))
                .case_insensitive(true)
                .build()
                .ok()
        };
        Self {
            brand,
            placeholder_url: rules.placeholder_url.clone(),
        }
    }

    /// Scrubs one value to its fixed point.
    pub fn scrub(&self, value: &str) -> String {
        let mut current = self.scrub_once(value);
        loop {
            let next = self.scrub_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Scrubs an optional cell; absent values stay absent.
    pub fn scrub_opt(&self, value: Option<&str>) -> Option<String> {
        value.map(|v| self.scrub(v))
    }

    fn scrub_once(&self, value: &str) -> String {
        let mut text = value.to_string();
        if let Some(brand) = &self.brand {
            if brand.is_match(&text) && is_link_like(&text) {
                return self.placeholder_url.clone();
            }
            while brand.is_match(&text) {
                text = brand.replace_all(&text, "").into_owned();
            }
        }
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        decode_entities(&collapsed)
    }
}

fn is_link_like(value: &str) -> bool {
    let lower = value.to_lowercase();
    LINK_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn decode_entities(value: &str) -> String {
    value.replace("&amp;", "&").replace("&#39;", "'")
}

/// Scrubs `value` with the default rules.
pub fn scrub(value: &str) -> String {
    Scrubber::default().scrub(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_the_two_supported_entities() {
        assert_eq!(scrub("AT&amp;T"), "AT&T");
        assert_eq!(scrub("Joe&#39;s Diner"), "Joe's Diner");
        assert_eq!(scrub("a &lt; b"), "a &lt; b");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(scrub("  Acme \t  Plumbing\n LLC "), "Acme Plumbing LLC");
    }

    #[test]
    fn test_branded_link_becomes_placeholder() {
        assert_eq!(
            scrub("https://www.YellowPages.com/miami/plumbers"),
            "https://www.example.com"
        );
        assert_eq!(scrub("yellowpages.net"), "https://www.example.com");
    }

    #[test]
    fn test_brand_token_is_removed_from_plain_text() {
        assert_eq!(scrub("Found on YELLOWPAGES listing"), "Found on listing");
        assert_eq!(scrub("yellowyellowpagespages"), "");
    }

    #[test]
    fn test_nested_entities_reach_a_fixed_point() {
        assert_eq!(scrub("AT&amp;amp;T"), "AT&T");
        let once = scrub("AT&amp;amp;amp;T");
        assert_eq!(scrub(&once), once);
    }

    #[test]
    fn test_custom_rules() {
        let rules = ScrubRules::default()
            .with_brand_token("acmeleads")
            .with_placeholder_url("https://leads.invalid");
        let scrubber = Scrubber::new(&rules);
        assert_eq!(scrubber.scrub("www.acmeleads.org/x"), "https://leads.invalid");
        assert_eq!(scrubber.scrub("yellowpages"), "yellowpages");
    }

    #[test]
    fn test_empty_token_disables_redaction() {
        let scrubber = Scrubber::new(&ScrubRules::default().with_brand_token(""));
        assert_eq!(
            scrubber.scrub("https://yellowpages.com"),
            "https://yellowpages.com"
        );
    }

    #[test]
    fn test_absent_values_pass_through() {
        let scrubber = Scrubber::default();
        assert_eq!(scrubber.scrub_opt(None), None);
        assert_eq!(scrubber.scrub_opt(Some(" a ")), Some("a".to_string()));
    }
}
