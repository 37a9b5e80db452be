//! Sparse column index to field name mapping.

use crate::fields::synthetic_name;

/// Maps column positions of one file to canonical field names.
///
/// Sized to the first row's column count. Slots left unset render as
/// `Column N` in [`header_names`](Self::header_names) but are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    slots: Vec<Option<String>>,
}

impl ColumnMapping {
    /// Creates an empty mapping for a row of `width` columns.
    pub fn with_width(width: usize) -> Self {
        Self {
            slots: vec![None; width],
        }
    }

    /// Creates a mapping from fixed `(index, name)` pairs.
    ///
    /// Indices beyond `width` are dropped: a short row has no such column.
    pub fn from_pairs<'a, I>(width: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut mapping = Self::with_width(width);
        for (index, name) in pairs {
            mapping.assign(index, name);
        }
        mapping
    }

    /// Number of columns covered by the mapping.
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Sets the name at `index`, overwriting any previous assignment.
    ///
    /// Returns false when `index` is out of range.
    pub fn assign(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(name.into());
                true
            }
            None => false,
        }
    }

    /// Assigns `name` to an unmapped `index` only if no other column holds it.
    pub fn claim(&mut self, index: usize, name: &str) -> bool {
        if self.is_mapped(index) || self.contains_name(name) {
            return false;
        }
        self.assign(index, name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    pub fn is_mapped(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.slots.iter().flatten().any(|assigned| assigned == name)
    }

    /// Number of explicitly assigned columns.
    pub fn mapped_len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True when no column has been assigned.
    pub fn is_empty(&self) -> bool {
        self.mapped_len() == 0
    }

    /// Iterates assigned `(index, name)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_deref().map(|name| (index, name)))
    }

    /// Full header list with synthetic names for unmapped columns.
    pub fn header_names(&self) -> Vec<String> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| slot.clone().unwrap_or_else(|| synthetic_name(index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_fill_gaps() {
        let mapping = ColumnMapping::from_pairs(4, [(0, "Category"), (2, "businessName")]);
        assert_eq!(
            mapping.header_names(),
            vec!["Category", "Column 2", "businessName", "Column 4"]
        );
        assert_eq!(mapping.mapped_len(), 2);
    }

    #[test]
    fn test_out_of_range_pairs_are_dropped() {
        let mapping = ColumnMapping::from_pairs(2, [(0, "a"), (5, "b")]);
        assert_eq!(mapping.width(), 2);
        assert!(!mapping.contains_name("b"));
    }

    #[test]
    fn test_claim_refuses_taken_names_and_slots() {
        let mut mapping = ColumnMapping::from_pairs(3, [(0, "Phone")]);
        assert!(!mapping.claim(1, "Phone"));
        assert!(!mapping.claim(0, "Website"));
        assert!(mapping.claim(1, "Website"));
        assert_eq!(mapping.get(1), Some("Website"));
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = ColumnMapping::with_width(8);
        assert!(mapping.is_empty());
        assert_eq!(mapping.iter().count(), 0);
    }
}
