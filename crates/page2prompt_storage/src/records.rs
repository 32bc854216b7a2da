//! Conversions between records and table rows.

use crate::schema::{DIRECTOR_STYLES, SHOTS, STYLES, SUBJECTS, Schema, SchemaRow};
use page2prompt_core::{DirectorStyle, Shot, Style, Subject, SubjectKind};
use std::str::FromStr;

/// A record stored as one row of a CSV table.
pub trait TableRecord: Sized {
    /// The table layout.
    const SCHEMA: Schema;

    /// Decode a row, or describe why it is unusable.
    fn from_row(row: &SchemaRow) -> Result<Self, String>;

    /// Encode as values in canonical column order.
    fn to_row(&self) -> Vec<String>;
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn require(row: &SchemaRow, column: &str) -> Result<String, String> {
    non_empty(row.get(column)).ok_or_else(|| format!("empty '{}'", column))
}

impl TableRecord for Subject {
    const SCHEMA: Schema = SUBJECTS;

    fn from_row(row: &SchemaRow) -> Result<Self, String> {
        let name = require(row, "Name")?;
        let kind = match row.get("Type") {
            "" => SubjectKind::default(),
            value => SubjectKind::from_str(value).unwrap_or_else(|_| {
                tracing::warn!(name = %name, kind = value, "Unknown subject type, using person");
                SubjectKind::default()
            }),
        };
        let alias = non_empty(row.get("Alias")).unwrap_or_else(|| name.clone());

        Ok(Subject::new(name, row.get("Description"), kind)
            .with_alias(alias)
            .with_prefix(row.get("Prefix"))
            .with_suffix(row.get("Suffix"))
            .with_active(row.get("Active").eq_ignore_ascii_case("true")))
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.description.clone(),
            self.alias.clone(),
            self.kind.to_string(),
            self.prefix.clone(),
            self.suffix.clone(),
            if self.active { "True" } else { "False" }.to_string(),
        ]
    }
}

impl TableRecord for Style {
    const SCHEMA: Schema = STYLES;

    fn from_row(row: &SchemaRow) -> Result<Self, String> {
        let mut style = Style::new(require(row, "name")?, row.get("prefix"), row.get("suffix"));
        style.genre = non_empty(row.get("genre"));
        style.descriptors = non_empty(row.get("descriptors"));
        Ok(style)
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.prefix.clone(),
            self.suffix.clone(),
            self.genre.clone().unwrap_or_default(),
            self.descriptors.clone().unwrap_or_default(),
        ]
    }
}

impl TableRecord for DirectorStyle {
    const SCHEMA: Schema = DIRECTOR_STYLES;

    fn from_row(row: &SchemaRow) -> Result<Self, String> {
        Ok(DirectorStyle {
            name: require(row, "name")?,
            visual_style: row.get("visual_style").to_string(),
            narrative_approach: row.get("narrative_approach").to_string(),
            cinematography: row.get("cinematography").to_string(),
            thematic_elements: row.get("thematic_elements").to_string(),
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.visual_style.clone(),
            self.narrative_approach.clone(),
            self.cinematography.clone(),
            self.thematic_elements.clone(),
        ]
    }
}

impl TableRecord for Shot {
    const SCHEMA: Schema = SHOTS;

    fn from_row(row: &SchemaRow) -> Result<Self, String> {
        Ok(Shot {
            timestamp: row.get("Timestamp").to_string(),
            scene: row.get("Scene").to_string(),
            shot: row.get("Shot").parse().unwrap_or_default(),
            reference: row.get("Script Reference").to_string(),
            description: row.get("Shot Description").to_string(),
            size: row.get("Shot Size").to_string(),
            people: row.get("People").to_string(),
            places: row.get("Places").to_string(),
            directors_notes: non_empty(row.get("Director's Notes")),
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.scene.clone(),
            self.shot.to_string(),
            self.reference.clone(),
            self.description.clone(),
            self.size.clone(),
            self.people.clone(),
            self.places.clone(),
            self.directors_notes.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(schema: Schema, values: &[&str]) -> SchemaRow {
        let mut row = SchemaRow::default();
        for (column, value) in schema.columns.iter().zip(values) {
            row.set(*column, *value);
        }
        row
    }

    #[test]
    fn test_subject_active_literal_and_alias_default() {
        let subject = Subject::from_row(&row(
            SUBJECTS,
            &["Ann", "A detective", "", "Person", "", "", "TRUE"],
        ))
        .unwrap();
        assert_eq!(subject.alias, "Ann");
        assert!(subject.active);
        assert_eq!(subject.to_row()[6], "True");
    }

    #[test]
    fn test_subject_without_name_rejected() {
        assert!(Subject::from_row(&row(SUBJECTS, &["", "x"])).is_err());
    }

    #[test]
    fn test_shot_notes_empty_is_none() {
        let shot = Shot::from_row(&row(SHOTS, &["0:01", "1", "2", "r", "d", "Wide", "Ann", "Dock", ""]))
            .unwrap();
        assert_eq!(shot.shot, 2);
        assert_eq!(shot.directors_notes, None);
    }
}
