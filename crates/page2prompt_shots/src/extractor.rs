//! Subject extraction from a screenplay and its shot list.

use crate::{DEFAULT_TIMEOUT, templates};
use page2prompt_codec::{parse_name_description_lines, parse_subjects_json};
use page2prompt_core::{CompletionRequest, Shot, Subject};
use page2prompt_interface::{CompletionGateway, complete_within};
use page2prompt_subjects::{
    SubjectRegistry, extract_unique_names, extract_unique_places, replace_on_conflict,
};
use std::time::Duration;

/// Subjects proposed for a script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionOutcome {
    /// Subjects read from the completion, unique by name
    pub subjects: Vec<Subject>,
    /// Inactive placeholders added for uncovered shot-list mentions
    pub placeholders: usize,
    /// Completion entries rejected as malformed
    pub dropped: usize,
}

/// Proposes people, places and props for a script.
pub struct SubjectExtractor<G: CompletionGateway> {
    gateway: G,
    timeout: Duration,
}

impl<G: CompletionGateway> SubjectExtractor<G> {
    /// Create an extractor with the default timeout.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the gateway timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extract subjects into `registry`, then cover every person and place
    /// the shot list mentions.
    ///
    /// The JSON answer form is tried first, then `name: description` lines.
    /// Extracted records replace stored records of the same name. Placeholders
    /// are only added for names the registry still lacks after that merge, so
    /// a stored record is never replaced by a placeholder. When the gateway
    /// fails only the placeholders are added.
    #[tracing::instrument(
        skip(self, script, shots, registry),
        fields(provider = self.gateway.provider_name(), shots = shots.len())
    )]
    pub async fn extract(
        &self,
        script: &str,
        shots: &[Shot],
        registry: &mut SubjectRegistry,
    ) -> ExtractionOutcome {
        let people = extract_unique_names(shots);
        let places = extract_unique_places(shots);

        let request = CompletionRequest::new(templates::SUBJECT_EXTRACTION)
            .variable("script", script)
            .variable("mentions_block", mentions_block(&people, &places));

        let (extracted, dropped) = match complete_within(&self.gateway, &request, self.timeout).await
        {
            Ok(text) => match parse_subjects_json(&text) {
                Ok(report) => (report.rows, report.dropped),
                Err(e) => {
                    tracing::warn!(error = %e, "No subject JSON; reading name: description lines");
                    let report = parse_name_description_lines(&text);
                    (report.rows, report.dropped)
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Subject extraction failed");
                (Vec::new(), 0)
            }
        };

        let subjects = replace_on_conflict(&[], &extracted);
        registry.merge_replace_on_conflict(&subjects);
        let placeholders = registry.cover_shot_list(shots);

        tracing::info!(subjects = subjects.len(), placeholders, dropped, "Subjects extracted");
        ExtractionOutcome {
            subjects,
            placeholders,
            dropped,
        }
    }
}

fn mentions_block(people: &[String], places: &[String]) -> String {
    let mut lines = Vec::new();
    if !people.is_empty() {
        lines.push(format!("People mentioned in the shot list: {}", people.join(", ")));
    }
    if !places.is_empty() {
        lines.push(format!("Places mentioned in the shot list: {}", places.join(", ")));
    }
    lines.join("\n")
}
