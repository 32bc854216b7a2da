//! Three-length prompt generation.

use crate::{DEFAULT_TIMEOUT, PromptContext, PromptOptions, templates};
use page2prompt_codec::split_paragraphs;
use page2prompt_core::{CompletionRequest, PromptBundle, PromptLength, PromptSession, Shot, Subject};
use page2prompt_error::GatewayErrorKind;
use page2prompt_interface::{CompletionGateway, ProgressSink, complete_within};
use page2prompt_subjects::apply_alias;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Start of the text stored in every field of a failed bundle.
pub const PROMPT_ERROR_PREFIX: &str = "Error generating prompt";

/// Builds concise, normal and detailed prompts through a completion gateway.
///
/// A failed gateway call never surfaces as an error: the returned bundle
/// carries the same `Error generating prompt: <cause>` text in all four
/// fields instead. An empty completion is a short response, not a failure,
/// and yields a bundle with every field empty.
pub struct PromptAssembler<G: CompletionGateway> {
    gateway: G,
    timeout: Duration,
}

impl<G: CompletionGateway> PromptAssembler<G> {
    /// Create an assembler with the default timeout.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call gateway timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generate one bundle of prompts for a shot.
    ///
    /// The response is split on blank lines and read positionally; missing
    /// positions stay empty. Non-empty prompts get subject aliases applied,
    /// then the style prefix and suffix and the end parameters.
    #[tracing::instrument(
        skip_all,
        fields(
            provider = self.gateway.provider_name(),
            subjects = subjects.len(),
            stick_to_script = options.stick_to_script,
        )
    )]
    pub async fn generate(
        &self,
        context: &PromptContext,
        subjects: &[Subject],
        options: &PromptOptions,
    ) -> PromptBundle {
        let request = bundle_request(context, subjects, options);

        let response = match complete_within(&self.gateway, &request, self.timeout).await {
            Ok(text) => text,
            Err(e) if e.gateway_kind() == Some(&GatewayErrorKind::EmptyResponse) => {
                tracing::warn!("Empty prompt response");
                return PromptBundle::default();
            }
            Err(e) => {
                tracing::error!(error = %e, "Prompt generation failed");
                return PromptBundle::uniform(format!("{}: {}", PROMPT_ERROR_PREFIX, e.cause()));
            }
        };

        let paragraphs = split_paragraphs(&response);
        if paragraphs.len() < 3 {
            tracing::warn!(paragraphs = paragraphs.len(), "Short prompt response");
        }

        let finish = |index: usize| -> String {
            match paragraphs.get(index).map(|p| p.trim()).filter(|p| !p.is_empty()) {
                Some(prompt) => wrap_prompt(
                    &apply_alias(subjects, prompt),
                    options.style_prefix(),
                    options.style_suffix(),
                    &options.end_parameters,
                ),
                None => String::new(),
            }
        };

        PromptBundle {
            concise: finish(0),
            normal: finish(1),
            detailed: finish(2),
            structured: response,
        }
    }

    /// Generate a bundle for every shot, strictly in order.
    ///
    /// Each bundle is recorded into `session` as it is produced. Progress is
    /// reported after every shot. Once `cancel` fires the remaining shots are
    /// skipped; the bundles produced so far are returned.
    #[tracing::instrument(
        skip_all,
        fields(provider = self.gateway.provider_name(), shots = shots.len())
    )]
    pub async fn generate_bulk(
        &self,
        shots: &[Shot],
        subjects: &[Subject],
        options: &PromptOptions,
        session: &mut PromptSession,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Vec<PromptBundle> {
        let total = shots.len();
        let mut bundles = Vec::with_capacity(total);

        for (index, shot) in shots.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!(completed = index, total, "Bulk prompt generation cancelled");
                break;
            }

            let bundle = self
                .generate(&PromptContext::from_shot(shot), subjects, options)
                .await;
            if bundle.concise.starts_with(PROMPT_ERROR_PREFIX) {
                tracing::warn!(shot_index = index, scene = %shot.scene, "Shot has no prompts");
            }
            session.record(bundle.clone());
            bundles.push(bundle);

            progress.report((index + 1) as f32 / total as f32);
            tokio::task::yield_now().await;
        }

        tracing::info!(generated = bundles.len(), total, "Bulk prompt generation finished");
        bundles
    }
}

/// Wrap a prompt as `prefix prompt suffix`, then append `end_parameters`.
///
/// Blank parts are left out, so no doubled or trailing spaces appear.
///
/// # Examples
///
/// ```
/// use page2prompt_prompts::wrap_prompt;
///
/// assert_eq!(wrap_prompt(" a dock ", "Noir:", "", "--ar 16:9"), "Noir: a dock --ar 16:9");
/// ```
pub fn wrap_prompt(prompt: &str, prefix: &str, suffix: &str, end_parameters: &str) -> String {
    [prefix, prompt, suffix, end_parameters]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn bundle_request(
    context: &PromptContext,
    subjects: &[Subject],
    options: &PromptOptions,
) -> CompletionRequest {
    let subject_lines: Vec<String> = subjects
        .iter()
        .filter(|s| s.active)
        .map(|s| format!("{}: {}", s.name, s.description.trim()))
        .collect();
    let subjects_block = if subject_lines.is_empty() {
        String::new()
    } else {
        format!("Subjects:\n{}", subject_lines.join("\n"))
    };

    let script_block = if options.stick_to_script {
        [
            ("Script Excerpt", context.script_excerpt.trim()),
            ("Full Script", options.full_script.trim()),
        ]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(label, text)| format!("{}: {}", label, text))
        .collect::<Vec<_>>()
        .join("\n")
    } else {
        String::new()
    };

    let style_block = options
        .style
        .as_ref()
        .map(|style| {
            let mut block = format!("Style: {}", style.name);
            if let Some(genre) = style.genre.as_deref().filter(|g| !g.trim().is_empty()) {
                block.push_str(&format!("\nGenre: {}", genre.trim()));
            }
            if let Some(descriptors) = style.descriptors.as_deref().filter(|d| !d.trim().is_empty()) {
                block.push_str(&format!("\nDescriptors: {}", descriptors.trim()));
            }
            block
        })
        .unwrap_or_default();

    let director_block = options
        .director_style
        .as_ref()
        .map(|d| format!("Director's Style: {}", d.summary()))
        .unwrap_or_default();

    let shot_block = [
        ("People", context.people.trim()),
        ("Places", context.places.trim()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect::<Vec<_>>()
    .join("\n");

    let camera = options.camera.or_size(&context.shot_size).render();
    let camera_block = if camera.is_empty() {
        String::new()
    } else {
        format!("Camera:\n{}", camera)
    };

    let mut request = CompletionRequest::new(templates::PROMPT_BUNDLE)
        .variable("shot_description", &context.shot_description)
        .variable("directors_notes", &context.directors_notes)
        .variable("shot_block", shot_block)
        .variable("script_block", script_block)
        .variable("subjects_block", subjects_block)
        .variable("style_block", style_block)
        .variable("director_block", director_block)
        .variable("camera_block", camera_block)
        .variable("concise_words", PromptLength::Concise.target_words().to_string())
        .variable("normal_words", PromptLength::Normal.target_words().to_string())
        .variable("detailed_words", PromptLength::Detailed.target_words().to_string());
    if let Some(temperature) = options.temperature {
        request = request.temperature(temperature);
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use page2prompt_core::{CameraSettings, SubjectKind};

    #[test]
    fn test_wrap_skips_blank_parts() {
        assert_eq!(wrap_prompt("a dock", "", "", ""), "a dock");
        assert_eq!(wrap_prompt("a dock", " Noir ", " grain ", " "), "Noir a dock grain");
    }

    #[test]
    fn test_script_only_with_stick_to_script() {
        let context = PromptContext::default()
            .with_shot_description("Ann at the rail")
            .with_script_excerpt("Ann waits.");
        let mut options = PromptOptions::default().with_full_script("INT. DOCK - NIGHT");

        let rendered = bundle_request(&context, &[], &options).render();
        assert!(!rendered.contains("Ann waits."));
        assert!(!rendered.contains("INT. DOCK"));

        options.stick_to_script = true;
        let rendered = bundle_request(&context, &[], &options).render();
        assert!(rendered.contains("Script Excerpt: Ann waits."));
        assert!(rendered.contains("Full Script: INT. DOCK - NIGHT"));
    }

    #[test]
    fn test_request_lists_active_subjects_and_camera() {
        let subjects = vec![
            Subject::new("Ann", "A detective", SubjectKind::Person),
            Subject::new("Dock", "A pier", SubjectKind::Place).with_active(false),
        ];
        let camera = CameraSettings::builder()
            .size("Wide")
            .lens_type("AI Suggest")
            .build()
            .unwrap();
        let options = PromptOptions::default().with_camera(camera);

        let rendered = bundle_request(&PromptContext::default(), &subjects, &options).render();
        assert!(rendered.contains("Ann: A detective"));
        assert!(!rendered.contains("A pier"));
        assert!(rendered.contains("Camera:\nSize: Wide"));
        assert!(!rendered.contains("Lens Type"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_shot_details_reach_the_request() {
        let shot = Shot {
            size: "Extreme Close-up".into(),
            people: "Ann, N/A".into(),
            places: "Harbor".into(),
            ..Default::default()
        };
        let context = PromptContext::from_shot(&shot);

        let rendered = bundle_request(&context, &[], &PromptOptions::default()).render();
        assert!(rendered.contains("People: Ann\n"));
        assert!(rendered.contains("Places: Harbor"));
        assert!(rendered.contains("Camera:\nSize: Extreme Close-up"));

        let camera = CameraSettings::builder().size("Wide").build().unwrap();
        let options = PromptOptions::default().with_camera(camera);
        let rendered = bundle_request(&context, &[], &options).render();
        assert!(rendered.contains("Size: Wide"));
        assert!(!rendered.contains("Extreme Close-up"));
    }
}
