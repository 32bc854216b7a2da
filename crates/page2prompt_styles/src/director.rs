//! Director reference styles.

use page2prompt_core::DirectorStyle;

/// Selection meaning "no director style".
pub const NO_DIRECTOR: &str = "No Director";

/// Read-only catalog of director styles keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorCatalog {
    directors: Vec<DirectorStyle>,
}

impl DirectorCatalog {
    /// Load a catalog, keeping the last of any duplicate names.
    pub fn load(directors: Vec<DirectorStyle>) -> Self {
        let mut catalog: Vec<DirectorStyle> = Vec::with_capacity(directors.len());
        for director in directors {
            match catalog.iter_mut().find(|d| d.name == director.name) {
                Some(existing) => *existing = director,
                None => catalog.push(director),
            }
        }
        Self { directors: catalog }
    }

    /// Director styles in catalog order.
    pub fn directors(&self) -> &[DirectorStyle] {
        &self.directors
    }

    /// Director names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.directors.iter().map(|d| d.name.as_str()).collect()
    }

    /// Look up a director. [`NO_DIRECTOR`], empty names and misses are `None`.
    pub fn get(&self, name: &str) -> Option<&DirectorStyle> {
        if name.is_empty() || name == NO_DIRECTOR {
            return None;
        }
        let found = self.directors.iter().find(|d| d.name == name);
        if found.is_none() {
            tracing::debug!(name, "Director style not found");
        }
        found
    }

    /// Summary text of a director style for completion context.
    pub fn summary(&self, name: &str) -> Option<String> {
        self.get(name).map(DirectorStyle::summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DirectorCatalog {
        DirectorCatalog::load(vec![
            DirectorStyle {
                name: "Lang".into(),
                visual_style: "old".into(),
                ..Default::default()
            },
            DirectorStyle {
                name: "Varda".into(),
                narrative_approach: "Essayistic".into(),
                ..Default::default()
            },
            DirectorStyle {
                name: "Lang".into(),
                visual_style: "Expressionist".into(),
                cinematography: "Hard shadows".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_sentinel_and_miss_are_none() {
        let catalog = catalog();
        assert!(catalog.get(NO_DIRECTOR).is_none());
        assert!(catalog.get("Kubrick").is_none());
        assert_eq!(catalog.names(), vec!["Lang", "Varda"]);
    }

    #[test]
    fn test_summary_skips_empty_fields() {
        let summary = catalog().summary("Lang").unwrap();
        assert_eq!(
            summary,
            "Lang\nVisual Style: Expressionist\nCinematography: Hard shadows"
        );
    }
}
