//! Completion requests: a template plus the variables it is rendered with.

use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder regex"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+\n").expect("blank-run regex"));

/// A structured request for the completion service.
///
/// Templates reference variables with `{{name}}`. Variables that were never
/// supplied render as nothing, so optional context sections vanish instead
/// of leaking placeholder text.
///
/// # Examples
///
/// ```
/// use page2prompt_core::CompletionRequest;
///
/// let request = CompletionRequest::new("Describe {{subject}} at {{place}}.")
///     .variable("subject", "Ann")
///     .temperature(0.7);
///
/// assert_eq!(request.render(), "Describe Ann at .");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
pub struct CompletionRequest {
    /// Optional system instruction
    #[getter(rename = "system_prompt")]
    system: Option<String>,
    /// Template text with `{{name}}` placeholders
    template: String,
    /// Values substituted into the template
    variables: BTreeMap<String, String>,
    /// Sampling temperature
    #[getter(rename = "sampling_temperature")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[getter(rename = "token_limit")]
    max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a request from a template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }

    /// Set a template variable.
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Set the system instruction.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of generated tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Render the template with the supplied variables.
    ///
    /// Runs of blank lines left by empty sections collapse to one blank line.
    pub fn render(&self) -> String {
        let rendered = PLACEHOLDER.replace_all(&self.template, |caps: &regex::Captures| {
            self.variables
                .get(&caps[1])
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        });
        BLANK_RUNS
            .replace_all(&rendered, "\n\n")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_and_trims_values() {
        let request = CompletionRequest::new("Shot: {{ shot }}\nSize: {{size}}")
            .variable("shot", "  Ann walks  ")
            .variable("size", "Wide");
        assert_eq!(request.render(), "Shot: Ann walks\nSize: Wide");
    }

    #[test]
    fn test_missing_sections_collapse() {
        let request = CompletionRequest::new("Intro\n\n{{script}}\n\n{{camera}}\n\nOutro");
        assert_eq!(request.render(), "Intro\n\nOutro");
    }

    #[test]
    fn test_builder_methods_set_options() {
        let request = CompletionRequest::new("x").system("be brief").max_tokens(64);
        assert_eq!(request.system_prompt().as_deref(), Some("be brief"));
        assert_eq!(*request.token_limit(), Some(64));
        assert_eq!(*request.sampling_temperature(), None);
    }
}
