//! Mock completion gateway for testing.

use crate::CompletionGateway;
use async_trait::async_trait;
use page2prompt_core::CompletionRequest;
use page2prompt_error::{GatewayError, GatewayErrorKind, Page2PromptResult};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GatewayErrorKind),
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
    /// Sleep for the duration, then succeed with the text
    Delay(Duration, String),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Completion text
    Success(String),
    /// Gateway failure
    Error(GatewayErrorKind),
}

/// Scriptable gateway that records every rendered request.
///
/// Clones share the call log.
#[derive(Debug, Clone)]
pub struct MockGateway {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    /// A gateway that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// A gateway that always fails with the given error.
    pub fn new_error(error: GatewayErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// A gateway that replays responses in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// A gateway that answers only after `delay`.
    pub fn new_delayed(delay: Duration, text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Delay(delay, text.into()))
    }

    /// A gateway with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times `complete` was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    /// Rendered prompt text of every call, in order.
    pub fn rendered_prompts(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, req: &CompletionRequest) -> usize {
        match self.calls.lock() {
            Ok(mut calls) => {
                calls.push(req.render());
                calls.len() - 1
            }
            Err(_) => 0,
        }
    }
}

#[async_trait]
impl CompletionGateway for MockGateway {
    async fn complete(&self, req: &CompletionRequest) -> Page2PromptResult<String> {
        let index = self.record(req);
        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(GatewayError::new(kind.clone()).into()),
            MockBehavior::Sequence(responses) => match responses.get(index) {
                Some(MockResponse::Success(text)) => Ok(text.clone()),
                Some(MockResponse::Error(kind)) => Err(GatewayError::new(kind.clone()).into()),
                None => Err(GatewayError::new(GatewayErrorKind::Http(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    index + 1,
                    responses.len()
                )))
                .into()),
            },
            MockBehavior::Delay(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
