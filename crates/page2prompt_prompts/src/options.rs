//! Inputs to a prompt generation call.

use derive_setters::Setters;
use page2prompt_core::{CameraSettings, DirectorStyle, Shot, Style};

/// Per-shot context for a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Setters)]
#[setters(prefix = "with_", into)]
pub struct PromptContext {
    /// What the camera sees
    pub shot_description: String,
    /// Director's notes for the shot
    pub directors_notes: String,
    /// Script excerpt the shot is based on
    pub script_excerpt: String,
    /// Shot size from the shot list; fills an unset camera size
    pub shot_size: String,
    /// People in the shot, comma-joined
    pub people: String,
    /// Places in the shot, comma-joined
    pub places: String,
}

impl PromptContext {
    /// Context taken from a shot-list row. `N/A` people and places are
    /// left out.
    pub fn from_shot(shot: &Shot) -> Self {
        Self {
            shot_description: shot.description.clone(),
            directors_notes: shot.directors_notes.clone().unwrap_or_default(),
            script_excerpt: shot.reference.clone(),
            shot_size: shot.size.trim().to_string(),
            people: shot.people_names().join(", "),
            places: shot.place_names().join(", "),
        }
    }
}

/// Settings shared by every prompt of a run.
///
/// # Examples
///
/// ```
/// use page2prompt_core::Style;
/// use page2prompt_prompts::PromptOptions;
///
/// let options = PromptOptions::default()
///     .with_style(Style::new("Noir", "A noir still of", "deep shadows"))
///     .with_style_suffix_override("grainy")
///     .with_end_parameters("--ar 16:9");
///
/// assert_eq!(options.style_prefix(), "A noir still of");
/// assert_eq!(options.style_suffix(), "grainy");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct PromptOptions {
    /// Style supplying the default prefix and suffix
    pub style: Option<Style>,
    /// Prefix used instead of the style's own
    pub style_prefix_override: Option<String>,
    /// Suffix used instead of the style's own
    pub style_suffix_override: Option<String>,
    /// Director whose approach is described to the model
    pub director_style: Option<DirectorStyle>,
    /// Camera choices for the shot
    pub camera: CameraSettings,
    /// Appended verbatim to every prompt
    pub end_parameters: String,
    /// Whether script text is sent with the request
    pub stick_to_script: bool,
    /// Full script, sent only with `stick_to_script`
    pub full_script: String,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl PromptOptions {
    /// Prefix applied to every prompt: a non-blank override, else the
    /// style's prefix.
    pub fn style_prefix(&self) -> &str {
        pick(
            self.style_prefix_override.as_deref(),
            self.style.as_ref().map(|s| s.prefix.as_str()),
        )
    }

    /// Suffix applied to every prompt: a non-blank override, else the
    /// style's suffix.
    pub fn style_suffix(&self) -> &str {
        pick(
            self.style_suffix_override.as_deref(),
            self.style.as_ref().map(|s| s.suffix.as_str()),
        )
    }
}

fn pick<'a>(overridden: Option<&'a str>, fallback: Option<&'a str>) -> &'a str {
    overridden
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or(fallback.map(str::trim))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_override_falls_back_to_style() {
        let options = PromptOptions::default()
            .with_style(Style::new("Noir", " dark ", "moody"))
            .with_style_prefix_override("   ");
        assert_eq!(options.style_prefix(), "dark");
        assert_eq!(options.style_suffix(), "moody");
    }

    #[test]
    fn test_no_style_is_empty() {
        let options = PromptOptions::default();
        assert_eq!(options.style_prefix(), "");
        assert_eq!(options.style_suffix(), "");
    }

    #[test]
    fn test_context_from_shot() {
        let shot = Shot {
            description: "Ann at the rail".into(),
            reference: "Ann waits.".into(),
            ..Default::default()
        };
        let context = PromptContext::from_shot(&shot);
        assert_eq!(context.directors_notes, "");
        assert_eq!(context.script_excerpt, "Ann waits.");
    }
}
