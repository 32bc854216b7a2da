//! Shot-list generation from a screenplay.

use crate::{DEFAULT_TIMEOUT, normalize, templates};
use page2prompt_codec::{SHOT_FIELDS, parse_pipe_rows};
use page2prompt_core::{CompletionRequest, Shot};
use page2prompt_interface::{CompletionGateway, complete_within};
use std::time::Duration;

/// Shots produced from one script, plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShotListOutcome {
    /// Normalized shots in document order
    pub shots: Vec<Shot>,
    /// Completion lines rejected as malformed
    pub dropped: usize,
    /// Gateway failure message, when the call failed
    pub error: Option<String>,
}

/// Asks the completion gateway for a pipe-delimited shot list.
pub struct ShotListGenerator<G: CompletionGateway> {
    gateway: G,
    timeout: Duration,
    temperature: Option<f32>,
}

impl<G: CompletionGateway> ShotListGenerator<G> {
    /// Create a generator with the default timeout.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            timeout: DEFAULT_TIMEOUT,
            temperature: None,
        }
    }

    /// Set the gateway timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Get a reference to the underlying gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Generate and normalize a shot list for `script`.
    ///
    /// A gateway failure yields an empty list with the failure recorded in
    /// [`ShotListOutcome::error`].
    #[tracing::instrument(
        skip(self, script),
        fields(provider = self.gateway.provider_name(), script_len = script.len())
    )]
    pub async fn generate(&self, script: &str) -> ShotListOutcome {
        let mut request = CompletionRequest::new(templates::SHOT_LIST).variable("script", script);
        if let Some(t) = self.temperature {
            request = request.temperature(t);
        }

        let text = match complete_within(&self.gateway, &request, self.timeout).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Shot list generation failed");
                return ShotListOutcome {
                    error: Some(format!("Error generating shot list: {}", e.cause())),
                    ..Default::default()
                };
            }
        };

        let report = parse_pipe_rows(&text, &SHOT_FIELDS);
        let shots = normalize(&report.rows);

        tracing::info!(shots = shots.len(), dropped = report.dropped, "Shot list generated");
        ShotListOutcome {
            shots,
            dropped: report.dropped,
            error: None,
        }
    }
}
