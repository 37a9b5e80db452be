//! Priority scoring for normalized records and leads.
//!
//! The score is a capped point system (0-100):
//!
//! - **Expiration urgency** (max 40): UCC expires in <30 days (+40),
//!   30-59 days (+25), 60-89 days (+10)
//! - **Freshness** (max 30): tagged `Last 90 Days`, or filed within the last 90 days
//! - **Contactability** (max 20): phone (+15), website (+5)
//! - **Completeness** (max 10): key principal identified
//!
//! Fields are looked up through [`FieldSource`](lead_model::FieldSource) by
//! alias lists, so both the ingestion record shape and the camelCase lead
//! shape score identically.

pub mod dates;
mod engine;

pub use dates::{days_between, parse_loose_date};
pub use engine::{
    COMPLETENESS_POINTS, ESTABLISHED_KEYS, EXPIRES_KEYS, FRESHNESS_POINTS, NEW_MARKET_TYPE,
    PHONE_KEYS, PHONE_POINTS, PRINCIPAL_KEYS, WEBSITE_KEYS, WEBSITE_POINTS, calculate_score,
    expiration_points, score, score_at,
};
