//! Merging subject lists and covering names referenced by a shot list.

use page2prompt_core::{Shot, Subject, SubjectKind, split_names};
use std::collections::{HashMap, HashSet};

/// Merge two subject lists, keyed by `name`, with the incoming record
/// replacing the existing one on conflict.
///
/// Records keep the position where their name first appeared. This is a
/// whole-record replacement: there is no field-level reconciliation, so a
/// partial update must supply the full record.
///
/// # Examples
///
/// ```
/// use page2prompt_core::{Subject, SubjectKind};
/// use page2prompt_subjects::replace_on_conflict;
///
/// let old = vec![Subject::new("Bob", "old", SubjectKind::Person)];
/// let new = vec![
///     Subject::new("Bob", "new", SubjectKind::Person),
///     Subject::new("Ann", "x", SubjectKind::Person),
/// ];
///
/// let merged = replace_on_conflict(&old, &new);
/// assert_eq!(merged[0].description, "new");
/// assert_eq!(merged[1].name, "Ann");
/// ```
pub fn replace_on_conflict(existing: &[Subject], incoming: &[Subject]) -> Vec<Subject> {
    let mut merged: Vec<Subject> = Vec::with_capacity(existing.len() + incoming.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for subject in existing.iter().chain(incoming) {
        match positions.get(&subject.name) {
            Some(&index) => merged[index] = subject.clone(),
            None => {
                positions.insert(subject.name.clone(), merged.len());
                merged.push(subject.clone());
            }
        }
    }

    merged
}

/// Distinct people named across `shots`, in order of first mention.
pub fn extract_unique_names(shots: &[Shot]) -> Vec<String> {
    unique(shots.iter().flat_map(Shot::people_names))
}

/// Distinct places named across `shots`, in order of first mention.
pub fn extract_unique_places(shots: &[Shot]) -> Vec<String> {
    unique(shots.iter().flat_map(|s| split_names(&s.places)))
}

fn unique<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Add an inactive placeholder subject for every name in `names` that the
/// list does not already contain.
///
/// A name already held by a subject of another kind counts as covered; the
/// existing record is kept.
///
/// # Examples
///
/// ```
/// use page2prompt_core::{Subject, SubjectKind};
/// use page2prompt_subjects::ensure_coverage;
///
/// let subjects = vec![Subject::new("Ann", "A detective", SubjectKind::Person)];
/// let names = vec!["Ann".to_string(), "Bob".to_string()];
///
/// let covered = ensure_coverage(&subjects, &names, SubjectKind::Person);
/// assert_eq!(covered.len(), 2);
/// assert!(!covered[1].active);
/// ```
pub fn ensure_coverage(subjects: &[Subject], names: &[String], kind: SubjectKind) -> Vec<Subject> {
    let known: HashSet<&str> = subjects.iter().map(|s| s.name.as_str()).collect();

    let placeholders: Vec<Subject> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty() && !known.contains(name))
        .map(|name| Subject::placeholder(name, kind))
        .collect();

    if !placeholders.is_empty() {
        tracing::debug!(
            kind = %kind,
            added = placeholders.len(),
            "Synthesized placeholder subjects"
        );
    }

    replace_on_conflict(subjects, &placeholders)
}
