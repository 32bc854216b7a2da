//! Subject-extraction responses.

use crate::{ParseReport, extract_json};
use page2prompt_core::{Subject, SubjectKind};
use page2prompt_error::{CodecError, CodecErrorKind};
use serde_json::Value;
use std::str::FromStr;

const REQUIRED_KEYS: [&str; 3] = ["name", "description", "type"];

/// Parse a `{"subjects": [{"name", "description", "type"}, ...]}` response.
///
/// A bare top-level array of subject objects is accepted too. Entries
/// lacking a required key, or whose `type` is not `person`, `place` or
/// `prop`, are dropped and counted.
///
/// # Errors
///
/// Fails only when the response holds no JSON at all or the JSON does not
/// parse; callers typically fall back to [`parse_name_description_lines`].
///
/// # Examples
///
/// ```
/// use page2prompt_codec::parse_subjects_json;
///
/// let text = r#"{"subjects": [
///     {"name": "Ann", "description": "A detective", "type": "person"},
///     {"name": "Dock", "type": "place"}
/// ]}"#;
///
/// let report = parse_subjects_json(text).unwrap();
/// assert_eq!(report.rows.len(), 1);
/// assert_eq!(report.dropped, 1);
/// ```
pub fn parse_subjects_json(text: &str) -> Result<ParseReport<Subject>, CodecError> {
    let json = extract_json(text)?;
    let value: Value = serde_json::from_str(&json)
        .map_err(|e| CodecError::new(CodecErrorKind::InvalidJson(e.to_string())))?;

    let entries = match &value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("subjects") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                return Err(CodecError::new(CodecErrorKind::MissingField {
                    row: 0,
                    field: "subjects".to_string(),
                }));
            }
        },
        _ => {
            return Err(CodecError::new(CodecErrorKind::InvalidJson(
                "expected an object or array".to_string(),
            )));
        }
    };

    let mut report = ParseReport::empty();
    for (row, entry) in entries.iter().enumerate() {
        match subject_from_entry(row, entry) {
            Ok(subject) => report.rows.push(subject),
            Err(e) => {
                tracing::warn!(row, error = %e.kind, "Dropping subject entry");
                report.dropped += 1;
            }
        }
    }

    tracing::debug!(
        accepted = report.rows.len(),
        dropped = report.dropped,
        "Parsed subject JSON"
    );
    Ok(report)
}

fn subject_from_entry(row: usize, entry: &Value) -> Result<Subject, CodecError> {
    let field = |key: &str| -> Result<String, CodecError> {
        entry
            .get(key)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                CodecError::new(CodecErrorKind::MissingField {
                    row,
                    field: key.to_string(),
                })
            })
    };

    let [name, description, kind] = REQUIRED_KEYS.map(field);
    let (name, description, kind) = (name?, description?, kind?);

    if name.is_empty() {
        return Err(CodecError::new(CodecErrorKind::MissingField {
            row,
            field: "name".to_string(),
        }));
    }

    let kind = SubjectKind::from_str(&kind).map_err(|_| {
        CodecError::new(CodecErrorKind::InvalidValue {
            row,
            field: "type".to_string(),
            value: kind.clone(),
        })
    })?;

    Ok(Subject::new(name, description, kind))
}

/// Parse `name: description` lines into person subjects.
///
/// Blank lines are ignored. Leading list markers are stripped. Non-blank
/// lines without a colon or with an empty name are dropped and counted.
///
/// # Examples
///
/// ```
/// use page2prompt_codec::parse_name_description_lines;
///
/// let report = parse_name_description_lines("- Ann: A detective\nnoise\n");
/// assert_eq!(report.rows[0].name, "Ann");
/// assert_eq!(report.dropped, 1);
/// ```
pub fn parse_name_description_lines(text: &str) -> ParseReport<Subject> {
    let mut report = ParseReport::empty();

    for (row, line) in text.lines().enumerate() {
        let line = line.trim().trim_start_matches(['-', '*', '•']).trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(':') {
            Some((name, description)) if !name.trim().is_empty() => {
                report.rows.push(Subject::new(
                    name.trim().trim_matches('*').trim(),
                    description.trim(),
                    SubjectKind::Person,
                ));
            }
            _ => {
                tracing::warn!(row, "Dropping line without 'name: description'");
                report.dropped += 1;
            }
        }
    }

    report
}
