//! Tokenized rows as produced by the CSV reader.

/// Ordered rows of raw cells. Rows may be ragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a table from anything string-like, mostly for tests and fixtures.
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first row with at least one non-blank cell.
    pub fn first_non_blank(&self) -> Option<usize> {
        self.rows.iter().position(|row| !is_blank_row(row))
    }
}

impl From<Vec<Vec<String>>> for RawTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows)
    }
}

/// A row is blank when every cell is empty after trimming.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_blank_skips_leading_blank_rows() {
        let table = RawTable::from_rows(vec![vec!["", "  "], vec![], vec!["a", "b"]]);
        assert_eq!(table.first_non_blank(), Some(2));
    }

    #[test]
    fn test_all_blank_table_has_no_first_row() {
        let table = RawTable::from_rows(vec![vec![" "], vec![""]]);
        assert_eq!(table.first_non_blank(), None);
        assert_eq!(RawTable::default().first_non_blank(), None);
    }
}
