//! The session-owned subject registry.

use crate::{apply_alias, ensure_coverage, extract_unique_names, extract_unique_places, replace_on_conflict};
use page2prompt_core::{Shot, Subject, SubjectKind, split_names};
use page2prompt_error::{Page2PromptResult, RegistryError, RegistryErrorKind};

/// Canonical list of subjects for one session, unique by `name`.
///
/// Mutations are expected from a single thread of control; the registry
/// does no internal locking.
///
/// # Examples
///
/// ```
/// use page2prompt_core::{Subject, SubjectKind};
/// use page2prompt_subjects::SubjectRegistry;
///
/// let mut registry = SubjectRegistry::default();
/// registry.add(Subject::new("Ann", "A detective", SubjectKind::Person))?;
/// assert!(registry.add(Subject::new("Ann", "dup", SubjectKind::Person)).is_err());
/// assert_eq!(registry.get_active().len(), 1);
/// # Ok::<(), page2prompt_error::Page2PromptError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
}

impl SubjectRegistry {
    /// Build a registry from a list, dropping earlier duplicates by name.
    pub fn from_subjects(subjects: Vec<Subject>) -> Self {
        let mut registry = Self::default();
        registry.replace_all(subjects);
        registry
    }

    /// All subjects in registry order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Consume the registry, returning its subjects.
    pub fn into_subjects(self) -> Vec<Subject> {
        self.subjects
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Replace the whole contents, deduplicating by name (last wins).
    pub fn replace_all(&mut self, subjects: Vec<Subject>) {
        self.subjects = replace_on_conflict(&[], &subjects);
        tracing::debug!(count = self.subjects.len(), "Registry reloaded");
    }

    /// Merge `incoming` in; an incoming record replaces the existing record
    /// of the same name wholesale.
    pub fn merge_replace_on_conflict(&mut self, incoming: &[Subject]) {
        self.subjects = replace_on_conflict(&self.subjects, incoming);
    }

    /// Insert a new subject.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryErrorKind::DuplicateKey`] when the name is taken.
    pub fn add(&mut self, subject: Subject) -> Page2PromptResult<()> {
        if self.get(&subject.name).is_some() {
            tracing::warn!(name = %subject.name, "Subject already exists");
            return Err(RegistryError::new(RegistryErrorKind::DuplicateKey(subject.name)).into());
        }
        self.subjects.push(subject);
        Ok(())
    }

    /// Replace the subject with the same name, or append it when absent.
    ///
    /// Returns `true` when an existing record was replaced.
    pub fn update(&mut self, subject: Subject) -> bool {
        match self.subjects.iter_mut().find(|s| s.name == subject.name) {
            Some(existing) => {
                *existing = subject;
                true
            }
            None => {
                tracing::debug!(name = %subject.name, "Update of unknown subject inserts it");
                self.subjects.push(subject);
                false
            }
        }
    }

    /// Remove a subject by name, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<Subject> {
        let index = self.subjects.iter().position(|s| s.name == name)?;
        Some(self.subjects.remove(index))
    }

    /// Look up a subject by name.
    pub fn get(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// Look up the first subject carrying `alias`.
    pub fn get_by_alias(&self, alias: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.alias == alias)
    }

    /// Subjects with `active == true`.
    pub fn get_active(&self) -> Vec<&Subject> {
        self.subjects.iter().filter(|s| s.active).collect()
    }

    /// Names of every subject of `kind`.
    pub fn names_of_kind(&self, kind: SubjectKind) -> Vec<&str> {
        self.subjects
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Active subjects named in a comma-joined `people` field, joined by
    /// `", "` in registry order.
    pub fn subjects_for_shot(&self, people: &str) -> String {
        let named = split_names(people);
        self.subjects
            .iter()
            .filter(|s| s.active && named.contains(&s.name.as_str()))
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Space-joined prefixes and suffixes of the named active subjects.
    pub fn prefix_suffix_for(&self, names: &[&str]) -> (String, String) {
        let chosen: Vec<&Subject> = self
            .subjects
            .iter()
            .filter(|s| s.active && names.contains(&s.name.as_str()))
            .collect();

        let prefixes: Vec<&str> = chosen
            .iter()
            .map(|s| s.prefix.trim())
            .filter(|p| !p.is_empty())
            .collect();
        let suffixes: Vec<&str> = chosen
            .iter()
            .map(|s| s.suffix.trim())
            .filter(|p| !p.is_empty())
            .collect();

        (prefixes.join(" "), suffixes.join(" "))
    }

    /// Substitute aliases of active subjects into `text`.
    pub fn apply_alias(&self, text: &str) -> String {
        apply_alias(&self.subjects, text)
    }

    /// Add inactive placeholders for every person and place `shots`
    /// mention that the registry lacks. Returns how many were added.
    #[tracing::instrument(skip(self, shots), fields(shots = shots.len()))]
    pub fn cover_shot_list(&mut self, shots: &[Shot]) -> usize {
        let before = self.subjects.len();
        let people = extract_unique_names(shots);
        let places = extract_unique_places(shots);
        self.subjects = ensure_coverage(&self.subjects, &people, SubjectKind::Person);
        self.subjects = ensure_coverage(&self.subjects, &places, SubjectKind::Place);
        let added = self.subjects.len() - before;
        tracing::info!(added, "Registry covers shot-list names");
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SubjectRegistry {
        SubjectRegistry::from_subjects(vec![
            Subject::new("Ann", "A detective", SubjectKind::Person)
                .with_prefix("weary")
                .with_suffix("in a coat"),
            Subject::new("Bob", "Her partner", SubjectKind::Person).with_prefix("tall"),
            Subject::new("Dock", "A pier", SubjectKind::Place).with_active(false),
        ])
    }

    #[test]
    fn test_update_is_upsert() {
        let mut registry = registry();
        assert!(registry.update(Subject::new("Bob", "Retired", SubjectKind::Person)));
        assert_eq!(registry.get("Bob").map(|s| s.description.as_str()), Some("Retired"));

        assert!(!registry.update(Subject::new("Cy", "New", SubjectKind::Prop)));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut registry = registry();
        assert!(registry.delete("Nobody").is_none());
        assert_eq!(registry.len(), 3);
        assert!(registry.delete("Ann").is_some());
        assert!(registry.get("Ann").is_none());
    }

    #[test]
    fn test_subjects_for_shot_uses_active_only() {
        let registry = registry();
        assert_eq!(registry.subjects_for_shot("Bob, Dock, Ann, Zed"), "Ann, Bob");
        assert_eq!(registry.subjects_for_shot(""), "");
    }

    #[test]
    fn test_prefix_suffix_for_named_subjects() {
        let registry = registry();
        let (prefix, suffix) = registry.prefix_suffix_for(&["Ann", "Bob"]);
        assert_eq!(prefix, "weary tall");
        assert_eq!(suffix, "in a coat");
    }

    #[test]
    fn test_names_of_kind_and_alias_lookup() {
        let registry = registry();
        assert_eq!(registry.names_of_kind(SubjectKind::Place), vec!["Dock"]);
        assert_eq!(registry.get_by_alias("Bob").map(|s| s.name.as_str()), Some("Bob"));
    }
}
