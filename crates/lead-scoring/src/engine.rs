//! Score computation.

use chrono::{Local, NaiveDate};
use lead_model::{FieldSource, ScoreInsight, ScoreResult};

use crate::dates::{days_between, parse_loose_date};

pub const EXPIRES_KEYS: &[&str] = &["Expires", "expires"];
pub const ESTABLISHED_KEYS: &[&str] = &["Date Filed", "establishedDate", "Record Date"];
pub const TYPE_KEYS: &[&str] = &["_type", "source"];
pub const PHONE_KEYS: &[&str] = &["Phone", "phone"];
pub const WEBSITE_KEYS: &[&str] = &["Website", "website"];
pub const PRINCIPAL_KEYS: &[&str] = &[
    "Key Principal",
    "Officer/Director",
    "keyPrincipal",
    "DirectName",
];

/// Type tag that marks a whole file as new market entries.
pub const NEW_MARKET_TYPE: &str = "Last 90 Days";

pub const FRESHNESS_POINTS: u8 = 30;
pub const PHONE_POINTS: u8 = 15;
pub const WEBSITE_POINTS: u8 = 5;
pub const COMPLETENESS_POINTS: u8 = 10;

const FRESHNESS_WINDOW_DAYS: i64 = 90;
const MAX_SCORE: u32 = 100;

/// Placeholder value exports use for "unknown".
const NOT_AVAILABLE: &str = "N/A";

/// Points for a UCC filing expiring `days` from today.
pub fn expiration_points(days: i64) -> u8 {
    match days {
        1..30 => 40,
        30..60 => 25,
        60..90 => 10,
        _ => 0,
    }
}

/// Scores `item` relative to the local calendar date.
pub fn score<F: FieldSource + ?Sized>(item: &F) -> ScoreResult {
    score_at(item, Local::now().date_naive())
}

/// Total score only, relative to the local calendar date.
pub fn calculate_score<F: FieldSource + ?Sized>(item: &F) -> u8 {
    score(item).total
}

/// Scores `item` as of `today`.
pub fn score_at<F: FieldSource + ?Sized>(item: &F, today: NaiveDate) -> ScoreResult {
    let mut insights = Vec::new();

    // 1. Expiration urgency
    if let Some(raw) = lookup(item, EXPIRES_KEYS) {
        match parse_loose_date(raw) {
            Some(expires) => {
                let days = days_between(today, expires);
                let points = expiration_points(days);
                if points > 0 {
                    insights.push(insight(format!("UCC expires in {days} days"), points));
                }
            }
            None => tracing::trace!(value = raw, "unparsable expiration date"),
        }
    }

    // 2. Freshness
    let new_market = lookup(item, TYPE_KEYS).is_some_and(|tag| tag == NEW_MARKET_TYPE);
    let recent_days = lookup(item, ESTABLISHED_KEYS)
        .and_then(parse_loose_date)
        .map(|established| days_between(established, today))
        .filter(|days| (0..=FRESHNESS_WINDOW_DAYS).contains(days));
    match recent_days {
        Some(days) => insights.push(insight(
            format!("Newly registered ({days} days ago)"),
            FRESHNESS_POINTS,
        )),
        None if new_market => insights.push(insight("New market entry", FRESHNESS_POINTS)),
        None => {}
    }

    // 3. Contactability
    if lookup(item, PHONE_KEYS).is_some() {
        insights.push(insight("Phone number available", PHONE_POINTS));
    }
    if lookup(item, WEBSITE_KEYS).is_some() {
        insights.push(insight("Website available", WEBSITE_POINTS));
    }

    // 4. Completeness
    if lookup(item, PRINCIPAL_KEYS).is_some() {
        insights.push(insight("Key principal identified", COMPLETENESS_POINTS));
    }

    let raw: u32 = insights.iter().map(|i| u32::from(i.points)).sum();
    let total = u8::try_from(raw.min(MAX_SCORE)).unwrap_or(u8::MAX);
    ScoreResult { total, insights }
}

/// First alias holding a usable value (non-empty, not `N/A`).
fn lookup<'a, F: FieldSource + ?Sized>(item: &'a F, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| item.field(key))
        .find(|value| !value.is_empty() && *value != NOT_AVAILABLE)
}

fn insight(label: impl Into<String>, points: u8) -> ScoreInsight {
    ScoreInsight {
        label: label.into(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_bands() {
        assert_eq!(expiration_points(0), 0);
        assert_eq!(expiration_points(-5), 0);
        assert_eq!(expiration_points(1), 40);
        assert_eq!(expiration_points(29), 40);
        assert_eq!(expiration_points(30), 25);
        assert_eq!(expiration_points(59), 25);
        assert_eq!(expiration_points(60), 10);
        assert_eq!(expiration_points(89), 10);
        assert_eq!(expiration_points(90), 0);
    }

    #[test]
    fn test_lookup_skips_placeholders() {
        let item: &[(&str, &str)] = &[("Phone", "N/A"), ("phone", "555-555-5555")];
        assert_eq!(lookup(item, PHONE_KEYS), Some("555-555-5555"));
        let empty: &[(&str, &str)] = &[("Phone", "")];
        assert_eq!(lookup(empty, PHONE_KEYS), None);
    }
}
