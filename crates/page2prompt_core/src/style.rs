//! Visual styles and director styles.

use serde::{Deserialize, Serialize};

/// A reusable prefix/suffix wrapper applied to generated prompts.
///
/// # Examples
///
/// ```
/// use page2prompt_core::Style;
///
/// let noir = Style::new("Noir", "A noir still of", "high contrast; deep shadows");
/// assert_eq!(noir.genre, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct Style {
    /// Unique key within a catalog
    pub name: String,
    /// Text placed before every prompt
    pub prefix: String,
    /// Text placed after every prompt
    pub suffix: String,
    /// Optional genre label
    #[serde(default)]
    pub genre: Option<String>,
    /// Optional `;`-separated descriptors
    #[serde(default)]
    pub descriptors: Option<String>,
}

impl Style {
    /// Create a style without genre or descriptors.
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
            genre: None,
            descriptors: None,
        }
    }

    /// Prefix and suffix joined into a single visual-style phrase.
    pub fn visual_summary(&self) -> String {
        format!("{} {}", self.prefix.trim(), self.suffix.trim())
            .trim()
            .to_string()
    }
}

/// A read-only reference description of a director's approach.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectorStyle {
    /// Unique key within the catalog
    pub name: String,
    /// Look of the images
    pub visual_style: String,
    /// How stories are told
    pub narrative_approach: String,
    /// Camera and lighting habits
    pub cinematography: String,
    /// Recurring themes
    pub thematic_elements: String,
}

impl DirectorStyle {
    /// Multi-line summary used as completion context.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        for (label, value) in [
            ("Visual Style", &self.visual_style),
            ("Narrative Approach", &self.narrative_approach),
            ("Cinematography", &self.cinematography),
            ("Thematic Elements", &self.thematic_elements),
        ] {
            if !value.trim().is_empty() {
                lines.push(format!("{}: {}", label, value.trim()));
            }
        }
        if lines.is_empty() {
            return self.name.clone();
        }
        format!("{}\n{}", self.name, lines.join("\n"))
    }
}
