//! Normalized records and the field lookup used by scoring.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::fields::{
    LOCATION_KEY, RESERVED_KEYS, SCORE_KEY, SOURCE_KEY, TYPE_KEY, ZIP_KEY, is_reserved_key,
};

/// Read access to named string fields.
///
/// Implemented by every record-like shape the scoring engine accepts.
pub trait FieldSource {
    fn field(&self, key: &str) -> Option<&str>;
}

/// One source row after mapping and scrubbing.
///
/// Data fields keep column order. A repeated header name keeps its first
/// position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRecord {
    fields: Vec<(String, String)>,
    /// Originating filename (`_source`).
    pub source: String,
    /// Type hint of the originating file (`_type`).
    pub type_hint: String,
    /// Resolved zip (`_zip`).
    pub zip: String,
    /// Resolved location (`_location`).
    pub location: String,
    /// Priority score, 0-100.
    pub score: u8,
}

impl NormalizedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Data field lookup; reserved metadata keys are not included.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Data field value, or empty when the field is absent.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldSource for NormalizedRecord {
    fn field(&self, key: &str) -> Option<&str> {
        match key {
            SOURCE_KEY => Some(self.source.as_str()),
            TYPE_KEY => Some(self.type_hint.as_str()),
            ZIP_KEY => Some(self.zip.as_str()),
            LOCATION_KEY => Some(self.location.as_str()),
            _ => self.get(key),
        }
    }
}

impl Serialize for NormalizedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Data columns named like a metadata key are shadowed by the metadata.
        let data: Vec<_> = self
            .fields
            .iter()
            .filter(|(name, _)| !is_reserved_key(name))
            .collect();
        let mut map = serializer.serialize_map(Some(data.len() + RESERVED_KEYS.len()))?;
        for (name, value) in data {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(SOURCE_KEY, &self.source)?;
        map.serialize_entry(TYPE_KEY, &self.type_hint)?;
        map.serialize_entry(ZIP_KEY, &self.zip)?;
        map.serialize_entry(LOCATION_KEY, &self.location)?;
        map.serialize_entry(SCORE_KEY, &self.score)?;
        map.end()
    }
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldSource for [(&str, &str)] {
    fn field(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }
}

/// Lead shape used by the outreach and prioritization surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessLead {
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub expires: Option<String>,
    pub established_date: Option<String>,
    pub key_principal: Option<String>,
    /// Source tag, e.g. `Last 90 Days`.
    pub source: Option<String>,
}

impl FieldSource for BusinessLead {
    fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "businessName" => &self.business_name,
            "phone" => &self.phone,
            "website" => &self.website,
            "expires" => &self.expires,
            "establishedDate" => &self.established_date,
            "keyPrincipal" => &self.key_principal,
            "source" => &self.source,
            _ => return None,
        };
        value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut record = NormalizedRecord::new();
        record.set("Name", "first");
        record.set("Phone", "555-123-4567");
        record.set("Name", "second");
        let names: Vec<_> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Name", "Phone"]);
        assert_eq!(record.get("Name"), Some("second"));
    }

    #[test]
    fn test_reserved_keys_resolve_through_field_source() {
        let mut record = NormalizedRecord::new();
        record.type_hint = "Last 90 Days".to_string();
        record.zip = "33101".to_string();
        assert_eq!(record.field("_type"), Some("Last 90 Days"));
        assert_eq!(record.field("_zip"), Some("33101"));
        assert_eq!(record.get("_type"), None);
    }

    #[test]
    fn test_serializes_fields_then_metadata() {
        let mut record = NormalizedRecord::new();
        record.set("businessName", "Acme");
        record.source = "list.csv".to_string();
        record.score = 45;
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"businessName":"Acme","_source":"list.csv","_type":"","_zip":"","_location":"","Score":45}"#
        );
    }

    #[test]
    fn test_reserved_named_columns_are_not_serialized_twice() {
        let mut record = NormalizedRecord::new();
        record.set("Name", "Acme");
        record.set("Score", "87");
        record.set("_zip", "99999");
        record.zip = "33101".to_string();
        record.score = 45;
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"Acme","_source":"","_type":"","_zip":"33101","_location":"","Score":45}"#
        );
    }

    #[test]
    fn test_business_lead_uses_camel_case_keys() {
        let lead: BusinessLead =
            serde_json::from_str(r#"{"keyPrincipal":"Jane Roe","phone":"555-555-5555"}"#).unwrap();
        assert_eq!(lead.field("keyPrincipal"), Some("Jane Roe"));
        assert_eq!(lead.field("website"), None);
        assert_eq!(lead.field("Phone"), None);
    }
}
