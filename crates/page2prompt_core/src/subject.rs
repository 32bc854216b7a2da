//! Recurring people, places and props.

use serde::{Deserialize, Serialize};

/// What a subject is.
///
/// # Examples
///
/// ```
/// use page2prompt_core::SubjectKind;
/// use std::str::FromStr;
///
/// assert_eq!(SubjectKind::from_str("Person").unwrap(), SubjectKind::Person);
/// assert_eq!(SubjectKind::Place.to_string(), "place");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SubjectKind {
    /// A character
    #[default]
    Person,
    /// A location
    Place,
    /// An object
    Prop,
}

impl SubjectKind {
    /// Description given to subjects synthesized from a shot-list mention.
    pub fn placeholder_description(self) -> &'static str {
        match self {
            SubjectKind::Person => "Character mentioned in the shot list",
            SubjectKind::Place => "Location mentioned in the shot list",
            SubjectKind::Prop => "Prop mentioned in the shot list",
        }
    }
}

/// A recurring person, place or prop with a stable identity.
///
/// `name` is the registry key. `alias` is what gets written into prompts
/// in place of the name; it defaults to the name.
///
/// # Examples
///
/// ```
/// use page2prompt_core::{Subject, SubjectKind};
///
/// let ann = Subject::new("Ann", "A detective", SubjectKind::Person)
///     .with_alias("the detective")
///     .with_prefix("weary");
///
/// assert_eq!(ann.alias, "the detective");
/// assert!(ann.active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct Subject {
    /// Unique key within a registry
    pub name: String,
    /// Free-text description used as completion context
    pub description: String,
    /// Rendering alias substituted for the name in prompts
    pub alias: String,
    /// Person, place or prop
    pub kind: SubjectKind,
    /// Words rendered before the name
    pub prefix: String,
    /// Words rendered after the name
    pub suffix: String,
    /// Whether the subject participates in prompt generation
    pub active: bool,
}

impl Subject {
    /// Create an active subject whose alias is its name.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: SubjectKind,
    ) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
            description: description.into(),
            kind,
            prefix: String::new(),
            suffix: String::new(),
            active: true,
        }
    }

    /// Create an inactive stand-in for a name referenced by the shot list.
    pub fn placeholder(name: impl Into<String>, kind: SubjectKind) -> Self {
        Self::new(name, kind.placeholder_description(), kind).with_active(false)
    }

    /// The span this subject occupies in generated text, using `label` as
    /// the name part.
    ///
    /// Prefix and suffix are only included when both are non-empty.
    pub fn span(&self, label: &str) -> String {
        let prefix = self.prefix.trim();
        let suffix = self.suffix.trim();
        if prefix.is_empty() || suffix.is_empty() {
            label.to_string()
        } else {
            format!("{} {} {}", prefix, label, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!(SubjectKind::from_str("PLACE").unwrap(), SubjectKind::Place);
        assert_eq!(SubjectKind::from_str("prop").unwrap(), SubjectKind::Prop);
        assert!(SubjectKind::from_str("vehicle").is_err());
    }

    #[test]
    fn test_placeholder_is_inactive() {
        let subject = Subject::placeholder("Harbor", SubjectKind::Place);
        assert!(!subject.active);
        assert_eq!(subject.alias, "Harbor");
        assert_eq!(subject.description, "Location mentioned in the shot list");
    }

    #[test]
    fn test_span_requires_prefix_and_suffix() {
        let bare = Subject::new("Bob", "", SubjectKind::Person).with_prefix("tall");
        assert_eq!(bare.span("Bob"), "Bob");

        let full = bare.with_suffix("in a coat");
        assert_eq!(full.span("B0B"), "tall B0B in a coat");
    }
}
