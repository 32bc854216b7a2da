//! Alias substitution.

use page2prompt_core::Subject;
use regex::Regex;
use std::collections::HashMap;

/// Replace subject names in `text` with their aliases.
///
/// Only active subjects take part. Where a subject has both a prefix and a
/// suffix, the full `prefix name suffix` span is matched first and rewritten
/// as `prefix alias suffix`; any remaining bare name becomes the alias.
///
/// Longer needles win over shorter ones at the same position and replaced
/// text is never rescanned, so a short name cannot clobber part of a longer
/// name or of an alias already written.
///
/// # Examples
///
/// ```
/// use page2prompt_core::{Subject, SubjectKind};
/// use page2prompt_subjects::apply_alias;
///
/// let subjects = vec![
///     Subject::new("Ann", "", SubjectKind::Person).with_alias("the detective"),
///     Subject::new("Annabel", "", SubjectKind::Person).with_alias("the heiress"),
/// ];
///
/// let text = apply_alias(&subjects, "Annabel greets Ann.");
/// assert_eq!(text, "the heiress greets the detective.");
/// ```
pub fn apply_alias(subjects: &[Subject], text: &str) -> String {
    let mut replacements: HashMap<String, String> = HashMap::new();

    for subject in subjects.iter().filter(|s| s.active) {
        if subject.name.is_empty() || subject.alias.is_empty() || subject.alias == subject.name {
            continue;
        }
        if !text.contains(&subject.name) {
            continue;
        }
        replacements
            .entry(subject.span(&subject.name))
            .or_insert_with(|| subject.span(&subject.alias));
        replacements
            .entry(subject.name.clone())
            .or_insert_with(|| subject.alias.clone());
    }

    if replacements.is_empty() {
        return text.to_string();
    }

    let mut needles: Vec<&String> = replacements.keys().collect();
    needles.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let pattern = needles
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");

    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures| {
                let found = &caps[0];
                replacements
                    .get(found)
                    .cloned()
                    .unwrap_or_else(|| found.to_string())
            })
            .into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "Alias pattern rejected; text left unchanged");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page2prompt_core::SubjectKind;

    fn person(name: &str, alias: &str) -> Subject {
        Subject::new(name, "", SubjectKind::Person).with_alias(alias)
    }

    #[test]
    fn test_no_names_is_noop() {
        let subjects = vec![person("Ann", "the detective")];
        assert_eq!(apply_alias(&subjects, "Rain on the dock."), "Rain on the dock.");
    }

    #[test]
    fn test_inactive_subjects_ignored() {
        let subjects = vec![person("Ann", "the detective").with_active(false)];
        assert_eq!(apply_alias(&subjects, "Ann waits."), "Ann waits.");
    }

    #[test]
    fn test_full_span_with_prefix_and_suffix() {
        let subjects = vec![
            person("Ann", "the detective")
                .with_prefix("weary")
                .with_suffix("in a trench coat"),
        ];
        let text = apply_alias(&subjects, "A weary Ann in a trench coat meets Ann.");
        assert_eq!(
            text,
            "A weary the detective in a trench coat meets the detective."
        );
    }

    #[test]
    fn test_alias_containing_shorter_name_not_rescanned() {
        let subjects = vec![person("Bob", "Bobby"), person("Bobby", "the kid")];
        assert_eq!(apply_alias(&subjects, "Bobby and Bob"), "the kid and Bobby");
    }
}
