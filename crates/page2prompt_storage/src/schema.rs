//! Canonical table schemas and legacy header migration.

use page2prompt_error::{StorageError, StorageErrorKind};
use std::collections::HashMap;

/// Column layout of one record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Table name used in diagnostics
    pub name: &'static str,
    /// Canonical header, in write order
    pub columns: &'static [&'static str],
    /// Column that must be present for a header to be recognized
    pub key: &'static str,
    /// Legacy header names (lowercase) and the canonical column they map to
    pub legacy: &'static [(&'static str, &'static str)],
}

/// `Name, Description, Alias, Type, Prefix, Suffix, Active`
pub const SUBJECTS: Schema = Schema {
    name: "subjects",
    columns: &["Name", "Description", "Alias", "Type", "Prefix", "Suffix", "Active"],
    key: "Name",
    legacy: &[("category", "Type"), ("kind", "Type")],
};

/// `name, prefix, suffix, genre, descriptors`
pub const STYLES: Schema = Schema {
    name: "styles",
    columns: &["name", "prefix", "suffix", "genre", "descriptors"],
    key: "name",
    legacy: &[("style name", "name"), ("style", "name")],
};

/// `name, visual_style, narrative_approach, cinematography, thematic_elements`
pub const DIRECTOR_STYLES: Schema = Schema {
    name: "director_styles",
    columns: &[
        "name",
        "visual_style",
        "narrative_approach",
        "cinematography",
        "thematic_elements",
    ],
    key: "name",
    legacy: &[
        ("director", "name"),
        ("visual style", "visual_style"),
        ("narrative approach", "narrative_approach"),
        ("thematic elements", "thematic_elements"),
    ],
};

/// `Timestamp, Scene, Shot, Script Reference, Shot Description, Shot Size,
/// People, Places, Director's Notes`
pub const SHOTS: Schema = Schema {
    name: "shots",
    columns: &[
        "Timestamp",
        "Scene",
        "Shot",
        "Script Reference",
        "Shot Description",
        "Shot Size",
        "People",
        "Places",
        "Director's Notes",
    ],
    key: "Scene",
    legacy: &[
        ("reference", "Script Reference"),
        ("description", "Shot Description"),
        ("size", "Shot Size"),
        ("directors_notes", "Director's Notes"),
        ("directors notes", "Director's Notes"),
    ],
};

impl Schema {
    /// Canonical column for a header cell, if it is known.
    ///
    /// Matching is case-insensitive against the canonical names first, then
    /// against the legacy names.
    pub fn canonical_column(&self, header: &str) -> Option<&'static str> {
        let header = header.trim().trim_start_matches('\u{feff}');
        let lowered = header.to_lowercase();
        self.columns
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(header))
            .or_else(|| {
                self.legacy
                    .iter()
                    .find(|(legacy, _)| *legacy == lowered)
                    .map(|(_, canonical)| *canonical)
            })
    }

    /// Map each header cell to its canonical column.
    ///
    /// Unknown cells map to `None` and are ignored on read.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::UnknownSchema`] when the key column is
    /// absent.
    pub fn resolve_header<'h>(
        &self,
        header: impl IntoIterator<Item = &'h str>,
    ) -> Result<Vec<Option<&'static str>>, StorageError> {
        let resolved: Vec<Option<&'static str>> = header
            .into_iter()
            .map(|cell| self.canonical_column(cell))
            .collect();

        if !resolved.contains(&Some(self.key)) {
            return Err(StorageError::new(StorageErrorKind::UnknownSchema(format!(
                "{} table has no '{}' column",
                self.name, self.key
            ))));
        }

        Ok(resolved)
    }

    /// Whether `header` is exactly the canonical header.
    pub fn is_canonical<'h>(&self, header: impl IntoIterator<Item = &'h str>) -> bool {
        header.into_iter().eq(self.columns.iter().copied())
    }
}

/// One table row keyed by canonical column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRow {
    values: HashMap<&'static str, String>,
}

impl SchemaRow {
    /// Set a column value.
    pub fn set(&mut self, column: &'static str, value: impl Into<String>) {
        self.values.insert(column, value.into());
    }

    /// A column value; missing columns read as empty.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(|v| v.trim()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_style_header_maps_to_canonical() {
        let header = ["Style Name", "Prefix", "Suffix", "Genre", "Descriptors"];
        let resolved = STYLES.resolve_header(header).unwrap();
        assert_eq!(
            resolved,
            vec![
                Some("name"),
                Some("prefix"),
                Some("suffix"),
                Some("genre"),
                Some("descriptors")
            ]
        );
        assert!(!STYLES.is_canonical(header));
    }

    #[test]
    fn test_lowercase_subject_header() {
        assert_eq!(SUBJECTS.canonical_column("active"), Some("Active"));
        assert_eq!(SUBJECTS.canonical_column("Category"), Some("Type"));
        assert_eq!(SUBJECTS.canonical_column("Inventory"), None);
    }

    #[test]
    fn test_missing_key_column_is_unknown_schema() {
        let err = SUBJECTS.resolve_header(["Title", "Body"]).unwrap_err();
        assert!(matches!(err.kind, StorageErrorKind::UnknownSchema(_)));
    }
}
