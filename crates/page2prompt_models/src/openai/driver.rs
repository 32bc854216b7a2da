//! Chat-completions gateway using reqwest.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
use async_trait::async_trait;
use page2prompt_core::CompletionRequest;
use page2prompt_error::{GatewayError, GatewayErrorKind, Page2PromptResult};
use page2prompt_interface::CompletionGateway;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Base URL of the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Gateway for OpenAI-compatible chat-completions services.
///
/// The rendered request template is sent as a single user message, after
/// the optional system instruction.
#[derive(Debug, Clone)]
pub struct OpenAiGateway {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAiGateway {
    /// Create a gateway reading the key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayErrorKind::MissingApiKey`] when the variable is unset.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn from_env(model: impl AsRef<str>) -> Page2PromptResult<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|e| {
            GatewayError::new(GatewayErrorKind::MissingApiKey(format!("{}: {}", API_KEY_VAR, e)))
        })?;
        Self::with_api_key(api_key, model.as_ref())
    }

    /// Create a gateway with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be
    /// initialized.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn with_api_key(api_key: impl Into<String>, model: &str) -> Page2PromptResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::new(GatewayErrorKind::MissingApiKey(API_KEY_VAR.to_string())).into());
        }

        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::new(GatewayErrorKind::Http(e.to_string())))?;

        debug!("Created chat-completions gateway");
        Ok(Self {
            client,
            api_key,
            model: model.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: None,
            max_tokens: None,
        })
    }

    /// Point the gateway at another compatible service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Temperature used when a request does not set one.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Token limit used when a request does not set one.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Give the HTTP client its own request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_http_timeout(mut self, timeout: Duration) -> Page2PromptResult<Self> {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::new(GatewayErrorKind::Http(e.to_string())))?;
        Ok(self)
    }

    /// Build the wire request for a completion request.
    pub fn chat_request(&self, req: &CompletionRequest) -> Page2PromptResult<ChatRequest> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = req.system_prompt() {
            messages.push(message(ChatRole::System, system.as_str())?);
        }
        messages.push(message(ChatRole::User, req.render())?);

        ChatRequest::builder()
            .model(self.model.clone())
            .messages(messages)
            .temperature(req.sampling_temperature().or(self.temperature))
            .max_tokens(req.token_limit().or(self.max_tokens))
            .build()
            .map_err(|e| GatewayError::new(GatewayErrorKind::Http(format!("Invalid request: {}", e))).into())
    }
}

fn message(role: ChatRole, content: impl Into<String>) -> Page2PromptResult<ChatMessage> {
    ChatMessage::builder()
        .role(role)
        .content(content)
        .build()
        .map_err(|e| GatewayError::new(GatewayErrorKind::Http(format!("Invalid message: {}", e))).into())
}

#[async_trait]
impl CompletionGateway for OpenAiGateway {
    #[instrument(skip(self, req), fields(model = %self.model))]
    async fn complete(&self, req: &CompletionRequest) -> Page2PromptResult<String> {
        let body = self.chat_request(req)?;
        let url = format!("{}/chat/completions", self.base_url);

        debug!(url = %url, messages = body.messages().len(), "Sending chat completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                if e.is_timeout() {
                    GatewayError::new(GatewayErrorKind::Timeout(0))
                } else {
                    GatewayError::new(GatewayErrorKind::Http(format!("Request failed: {}", e)))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(GatewayError::new(GatewayErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GatewayError::new(GatewayErrorKind::ResponseParsing(e.to_string()))
        })?;

        if let Some(usage) = parsed.usage() {
            debug!(
                prompt_tokens = usage.prompt_tokens(),
                completion_tokens = usage.completion_tokens(),
                "Received chat completion"
            );
        }

        parsed
            .first_text()
            .map(str::to_string)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| GatewayError::new(GatewayErrorKind::EmptyResponse).into())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_and_overrides() {
        let gateway = OpenAiGateway::with_api_key("sk-test", "gpt-4o-mini")
            .unwrap()
            .with_temperature(0.7)
            .with_max_tokens(512);

        let req = CompletionRequest::new("Describe {{who}}")
            .variable("who", "Ann")
            .system("Be vivid")
            .temperature(0.2);
        let chat = gateway.chat_request(&req).unwrap();

        assert_eq!(*chat.temperature(), Some(0.2));
        assert_eq!(*chat.max_tokens(), Some(512));
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(*chat.messages()[0].role(), ChatRole::System);
        assert_eq!(chat.messages()[1].content(), "Describe Ann");
    }

    #[test]
    fn test_wire_format() {
        let gateway = OpenAiGateway::with_api_key("sk-test", "gpt-4o-mini").unwrap();
        let chat = gateway.chat_request(&CompletionRequest::new("hi")).unwrap();
        let json = serde_json::to_value(&chat).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "hi"}]
            })
        );
    }

    #[test]
    fn test_response_first_text() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "One\n\nTwo"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.first_text(), Some("One\n\nTwo"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = OpenAiGateway::with_api_key(" ", "m").unwrap_err();
        assert!(err.is_gateway());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let gateway = OpenAiGateway::with_api_key("k", "m")
            .unwrap()
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(gateway.base_url, "http://localhost:8080/v1");
    }
}
