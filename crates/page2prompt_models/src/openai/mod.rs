//! OpenAI-compatible chat completions.

mod driver;
mod dto;

pub use driver::{DEFAULT_BASE_URL, OpenAiGateway};
pub use dto::{
    ChatMessage, ChatMessageBuilder, ChatRequest, ChatRequestBuilder, ChatResponse, ChatRole,
};
