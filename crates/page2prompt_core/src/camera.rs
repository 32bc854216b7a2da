//! Camera settings chosen for a shot.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// UI choice meaning "let the model decide"; treated as unset.
pub const AI_SUGGEST: &str = "AI Suggest";

/// Camera settings for a single prompt generation.
///
/// Every field is optional. Empty strings and [`AI_SUGGEST`] count as unset
/// and never appear in the completion request.
///
/// # Examples
///
/// ```
/// use page2prompt_core::CameraSettings;
///
/// let camera = CameraSettings::builder()
///     .shot("Close-up")
///     .lens_type("AI Suggest")
///     .build()
///     .unwrap();
///
/// assert_eq!(camera.entries(), vec![("Shot", "Close-up")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into, strip_option), default)]
pub struct CameraSettings {
    /// Shot type
    shot: Option<String>,
    /// Camera move
    #[serde(rename = "move")]
    camera_move: Option<String>,
    /// Shot size
    size: Option<String>,
    /// Framing
    framing: Option<String>,
    /// Depth of field
    depth_of_field: Option<String>,
    /// Camera type
    camera_type: Option<String>,
    /// Camera name
    camera_name: Option<String>,
    /// Lens type
    lens_type: Option<String>,
}

impl CameraSettings {
    /// Creates a new builder for `CameraSettings`.
    pub fn builder() -> CameraSettingsBuilder {
        CameraSettingsBuilder::default()
    }

    /// Labelled values that are actually set, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Shot", &self.shot),
            ("Move", &self.camera_move),
            ("Size", &self.size),
            ("Framing", &self.framing),
            ("Depth of Field", &self.depth_of_field),
            ("Camera Type", &self.camera_type),
            ("Camera Name", &self.camera_name),
            ("Lens Type", &self.lens_type),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty() && *v != AI_SUGGEST)
                .map(|v| (label, v))
        })
        .collect()
    }

    /// Copy with `size` filled in when the size is unset.
    pub fn or_size(&self, size: &str) -> Self {
        let unset = self.entries().iter().all(|(label, _)| *label != "Size");
        let mut camera = self.clone();
        if unset && !size.trim().is_empty() {
            camera.size = Some(size.trim().to_string());
        }
        camera
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Flattened `Label: value` block, one entry per line.
    pub fn render(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_skipped() {
        let camera = CameraSettings::builder()
            .shot("Wide")
            .camera_move("")
            .framing(AI_SUGGEST)
            .depth_of_field("Shallow")
            .build()
            .unwrap();

        assert_eq!(camera.render(), "Shot: Wide\nDepth of Field: Shallow");
    }

    #[test]
    fn test_or_size_fills_only_unset_size() {
        let suggested = CameraSettings::builder().size(AI_SUGGEST).build().unwrap();
        assert_eq!(suggested.or_size("Medium").render(), "Size: Medium");

        let chosen = CameraSettings::builder().size("Wide").build().unwrap();
        assert_eq!(chosen.or_size("Medium").render(), "Size: Wide");
        assert!(CameraSettings::default().or_size(" ").is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(CameraSettings::default().is_empty());
        assert_eq!(CameraSettings::default().render(), "");
    }
}
