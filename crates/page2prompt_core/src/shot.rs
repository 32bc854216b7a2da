//! Shot-list rows.

use serde::{Deserialize, Serialize};

/// Sentinel the shot-list completion uses for fields it cannot determine.
pub const NOT_APPLICABLE: &str = "N/A";

/// One camera setup within a scene.
///
/// `scene` is an opaque label compared by equality only. `shot` is derived:
/// it is reassigned by the shot-list processor so that every run of rows
/// sharing a scene is numbered `1..=N` in document order.
///
/// # Examples
///
/// ```
/// use page2prompt_core::Shot;
///
/// let shot = Shot {
///     scene: "1".to_string(),
///     people: "Ann, Bob, N/A".to_string(),
///     ..Default::default()
/// };
///
/// assert_eq!(shot.people_names(), vec!["Ann", "Bob"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shot {
    /// Position in the source media, free-form
    pub timestamp: String,
    /// Scene label
    pub scene: String,
    /// 1-based position within the scene
    pub shot: u32,
    /// Verbatim script excerpt this shot is based on
    pub reference: String,
    /// What the shot shows
    pub description: String,
    /// Shot size (close-up, wide, ...)
    pub size: String,
    /// Comma-joined people names
    pub people: String,
    /// Comma-joined place names
    pub places: String,
    /// Optional director's notes
    #[serde(default)]
    pub directors_notes: Option<String>,
}

impl Shot {
    /// People referenced by this shot, in order, without blanks or `N/A`.
    pub fn people_names(&self) -> Vec<&str> {
        split_names(&self.people)
    }

    /// Places referenced by this shot, in order, without blanks or `N/A`.
    pub fn place_names(&self) -> Vec<&str> {
        split_names(&self.places)
    }
}

/// Split a comma-joined name field, trimming whitespace and dropping empty
/// entries and the `N/A` sentinel.
pub fn split_names(field: &str) -> Vec<&str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != NOT_APPLICABLE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names_skips_sentinel_and_blanks() {
        assert_eq!(split_names(" Ann ,, N/A,Bob "), vec!["Ann", "Bob"]);
        assert!(split_names("").is_empty());
        assert!(split_names("N/A").is_empty());
    }

    #[test]
    fn test_people_and_place_names_skip_sentinel() {
        let shot = Shot {
            people: "Ann, N/A".to_string(),
            places: "Dock".to_string(),
            ..Default::default()
        };
        assert_eq!(shot.people_names(), vec!["Ann"]);
        assert_eq!(shot.place_names(), vec!["Dock"]);
    }
}
