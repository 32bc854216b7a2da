//! Result of a tolerant parse.

/// Rows that parsed plus the number that were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport<T> {
    /// Accepted rows in input order
    pub rows: Vec<T>,
    /// Rows rejected as malformed
    pub dropped: usize,
}

impl<T> ParseReport<T> {
    /// A report with no rows.
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            dropped: 0,
        }
    }

    /// Whether no row was accepted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Default for ParseReport<T> {
    fn default() -> Self {
        Self::empty()
    }
}
