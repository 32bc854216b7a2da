//! Pipe-delimited rows.

use crate::ParseReport;
use std::collections::BTreeMap;

/// Positional field names of a shot-list row.
pub const SHOT_FIELDS: [&str; 8] = [
    "timestamp",
    "scene",
    "shot",
    "reference",
    "description",
    "size",
    "people",
    "places",
];

/// One accepted row, keyed by field name. Every value is an untyped string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipeRow {
    fields: BTreeMap<String, String>,
}

impl PipeRow {
    /// Build a row from field/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of a field; a missing field reads as the empty string.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Whether the field is present at all.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split `text` into rows of exactly `fields.len()` pipe-separated values.
///
/// Blank lines are skipped. Lines with any other field count are dropped
/// and counted. Values are trimmed but otherwise kept verbatim.
///
/// # Examples
///
/// ```
/// use page2prompt_codec::parse_pipe_rows;
///
/// let report = parse_pipe_rows("a|b\n\nc|d|e\nf|g", &["left", "right"]);
/// assert_eq!(report.rows.len(), 2);
/// assert_eq!(report.dropped, 1);
/// assert_eq!(report.rows[1].get("right"), "g");
/// ```
pub fn parse_pipe_rows(text: &str, fields: &[&str]) -> ParseReport<PipeRow> {
    let mut report = ParseReport::empty();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split('|').collect();
        if values.len() != fields.len() {
            tracing::warn!(
                row = line_no + 1,
                expected = fields.len(),
                found = values.len(),
                "Dropping pipe row with wrong field count"
            );
            report.dropped += 1;
            continue;
        }

        report.rows.push(PipeRow::from_pairs(
            fields
                .iter()
                .zip(values)
                .map(|(field, value)| (*field, value.trim())),
        ));
    }

    tracing::debug!(
        accepted = report.rows.len(),
        dropped = report.dropped,
        "Parsed pipe rows"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let row = PipeRow::from_pairs([("scene", "1")]);
        assert_eq!(row.get("scene"), "1");
        assert_eq!(row.get("people"), "");
        assert!(!row.contains("people"));
    }

    #[test]
    fn test_values_trimmed_but_verbatim() {
        let text = "00:01|1|x|\"Hello, world\"|Ann waves|Close-up|Ann, Bob|Dock";
        let report = parse_pipe_rows(text, &SHOT_FIELDS);
        assert_eq!(report.dropped, 0);
        let row = &report.rows[0];
        assert_eq!(row.get("shot"), "x");
        assert_eq!(row.get("reference"), "\"Hello, world\"");
        assert_eq!(row.get("people"), "Ann, Bob");
    }
}
