//! Director's notes for every shot of a shot list.

use crate::{DEFAULT_TIMEOUT, templates};
use page2prompt_core::{CompletionRequest, DirectorStyle, NOT_APPLICABLE, Shot, Style};
use page2prompt_interface::{CompletionGateway, ProgressSink, complete_within};
use page2prompt_subjects::SubjectRegistry;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Stored in place of notes when the gateway fails for a shot.
pub const NOTES_ERROR: &str = "Error generating notes";

/// Writes director's notes shot by shot.
pub struct DirectorNotesGenerator<G: CompletionGateway> {
    gateway: G,
    timeout: Duration,
}

impl<G: CompletionGateway> DirectorNotesGenerator<G> {
    /// Create a generator with the default timeout.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-shot gateway timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generate notes for every shot, strictly in order.
    ///
    /// Each shot's notes are the trimmed completion; a failed call stores
    /// [`NOTES_ERROR`] and the loop moves on. Progress is reported after
    /// every shot. Once `cancel` fires, the remaining shots are returned
    /// untouched.
    #[tracing::instrument(
        skip_all,
        fields(
            provider = self.gateway.provider_name(),
            shots = shots.len(),
            style = style.map(|s| s.name.as_str()),
            director = director.map(|d| d.name.as_str()),
        )
    )]
    pub async fn generate_bulk(
        &self,
        shots: &[Shot],
        style: Option<&Style>,
        director: Option<&DirectorStyle>,
        registry: &SubjectRegistry,
        progress: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Vec<Shot> {
        let mut annotated = shots.to_vec();
        let total = annotated.len();

        for (index, shot) in annotated.iter_mut().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!(completed = index, total, "Director's notes cancelled");
                break;
            }

            let request = notes_request(shot, style, director, registry);
            let notes = match complete_within(&self.gateway, &request, self.timeout).await {
                Ok(text) => text.trim().to_string(),
                Err(e) => {
                    tracing::error!(shot_index = index, error = %e, "Director's notes failed");
                    NOTES_ERROR.to_string()
                }
            };
            shot.directors_notes = Some(notes);

            progress.report((index + 1) as f32 / total as f32);
            tokio::task::yield_now().await;
        }

        annotated
    }
}

fn notes_request(
    shot: &Shot,
    style: Option<&Style>,
    director: Option<&DirectorStyle>,
    registry: &SubjectRegistry,
) -> CompletionRequest {
    let people = registry.subjects_for_shot(&shot.people);
    let style_block = style
        .map(Style::visual_summary)
        .filter(|s| !s.is_empty())
        .map(|s| format!("Visual Style: {}", s))
        .unwrap_or_default();
    let director_block = director
        .map(|d| format!("Director's Style: {}", d.summary()))
        .unwrap_or_default();

    CompletionRequest::new(templates::DIRECTOR_NOTES)
        .variable("scene", &shot.scene)
        .variable("shot", shot.shot.to_string())
        .variable("size", &shot.size)
        .variable("places", &shot.places)
        .variable("reference", &shot.reference)
        .variable("description", &shot.description)
        .variable(
            "people",
            if people.is_empty() {
                NOT_APPLICABLE.to_string()
            } else {
                people
            },
        )
        .variable("style_block", style_block)
        .variable("director_block", director_block)
}
