//! Editable style catalog.

use crate::random_style;
use page2prompt_core::Style;
use page2prompt_error::{Page2PromptResult, RegistryError, RegistryErrorKind};

/// Named prefix/suffix styles, unique by name.
///
/// # Examples
///
/// ```
/// use page2prompt_core::Style;
/// use page2prompt_styles::StyleCatalog;
///
/// let catalog = StyleCatalog::from_styles(vec![Style::new("Noir", "A noir still of", "deep shadows")]);
///
/// assert_eq!(catalog.get_prefix_suffix("Noir").0, "A noir still of");
/// assert_eq!(catalog.get_prefix_suffix("Unknown"), (String::new(), String::new()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleCatalog {
    styles: Vec<Style>,
}

impl StyleCatalog {
    /// Build a catalog, keeping the last of any duplicate names.
    pub fn from_styles(styles: Vec<Style>) -> Self {
        let mut catalog = Self::default();
        for style in styles {
            catalog.update(style);
        }
        catalog
    }

    /// All styles in catalog order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Style names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.styles.iter().map(|s| s.name.as_str()).collect()
    }

    /// Look up a style. A miss means "no styling applied".
    pub fn get(&self, name: &str) -> Option<&Style> {
        let found = self.styles.iter().find(|s| s.name == name);
        if found.is_none() && !name.is_empty() {
            tracing::debug!(name, "Style not found");
        }
        found
    }

    /// Prefix and suffix of a style, or two empty strings on a miss.
    pub fn get_prefix_suffix(&self, name: &str) -> (String, String) {
        self.get(name)
            .map(|s| (s.prefix.clone(), s.suffix.clone()))
            .unwrap_or_default()
    }

    /// Insert a new style.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryErrorKind::DuplicateKey`] when the name is taken.
    pub fn add(&mut self, style: Style) -> Page2PromptResult<()> {
        if self.get(&style.name).is_some() {
            tracing::warn!(name = %style.name, "Style already exists");
            return Err(RegistryError::new(RegistryErrorKind::DuplicateKey(style.name)).into());
        }
        self.styles.push(style);
        Ok(())
    }

    /// Replace the style with the same name, or append it.
    ///
    /// Returns `true` when an existing style was replaced.
    pub fn update(&mut self, style: Style) -> bool {
        match self.styles.iter_mut().find(|s| s.name == style.name) {
            Some(existing) => {
                *existing = style;
                true
            }
            None => {
                self.styles.push(style);
                false
            }
        }
    }

    /// Remove a style by name.
    pub fn delete(&mut self, name: &str) -> Option<Style> {
        let index = self.styles.iter().position(|s| s.name == name)?;
        Some(self.styles.remove(index))
    }

    /// Generate a random style and store it, replacing any style that
    /// happens to share its name.
    pub fn generate_random(&mut self) -> Style {
        let style = random_style();
        tracing::info!(name = %style.name, "Generated random style");
        self.update(style.clone());
        style
    }
}
