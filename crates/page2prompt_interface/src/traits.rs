//! Core traits for completion gateways and progress reporting.

use async_trait::async_trait;
use page2prompt_core::CompletionRequest;
use page2prompt_error::{GatewayError, GatewayErrorKind, Page2PromptResult};
use std::sync::Arc;
use std::time::Duration;

/// A text-completion service.
///
/// Implementations receive a structured request and return the raw
/// completion text. Rendering, timeouts and post-processing belong to the
/// caller.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Complete a request, returning the model's text.
    async fn complete(&self, req: &CompletionRequest) -> Page2PromptResult<String>;

    /// Provider name (e.g., "openai", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<G: CompletionGateway + ?Sized> CompletionGateway for Arc<G> {
    async fn complete(&self, req: &CompletionRequest) -> Page2PromptResult<String> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<G: CompletionGateway + ?Sized> CompletionGateway for Box<G> {
    async fn complete(&self, req: &CompletionRequest) -> Page2PromptResult<String> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Complete a request, failing with [`GatewayErrorKind::Timeout`] when the
/// gateway has not answered within `timeout`.
///
/// An empty or whitespace-only completion is reported as
/// [`GatewayErrorKind::EmptyResponse`].
pub async fn complete_within<G>(
    gateway: &G,
    req: &CompletionRequest,
    timeout: Duration,
) -> Page2PromptResult<String>
where
    G: CompletionGateway + ?Sized,
{
    let text = match tokio::time::timeout(timeout, gateway.complete(req)).await {
        Ok(result) => result?,
        Err(_) => {
            tracing::error!(
                provider = gateway.provider_name(),
                timeout_secs = timeout.as_secs(),
                "Completion timed out"
            );
            return Err(GatewayError::new(GatewayErrorKind::Timeout(timeout.as_secs())).into());
        }
    };

    if text.trim().is_empty() {
        return Err(GatewayError::new(GatewayErrorKind::EmptyResponse).into());
    }
    Ok(text)
}

/// Receives the completed fraction of a bulk operation.
///
/// Values are in `(0.0, 1.0]` and reported once per finished item.
pub trait ProgressSink: Send + Sync {
    /// Report progress.
    fn report(&self, fraction: f32);
}

impl<F> ProgressSink for F
where
    F: Fn(f32) + Send + Sync,
{
    fn report(&self, fraction: f32) {
        self(fraction)
    }
}

/// A progress sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _fraction: f32) {}
}
