//! Completion gateway implementations for Page2Prompt.
//!
//! [`OpenAiGateway`] talks to any service exposing the OpenAI
//! chat-completions API (OpenAI itself, Groq, local servers, ...).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatMessage, ChatMessageBuilder, ChatRequest, ChatRequestBuilder, ChatResponse, ChatRole,
    DEFAULT_BASE_URL, OpenAiGateway,
};
