//! Prompt assembly for Page2Prompt.
//!
//! [`PromptAssembler`] asks the completion gateway for three image prompts
//! of increasing length per shot and wraps them with style text, subject
//! aliases and trailing end parameters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod options;
mod templates;

pub use assembler::{PROMPT_ERROR_PREFIX, PromptAssembler, wrap_prompt};
pub use options::{PromptContext, PromptOptions};

use std::time::Duration;

/// Gateway timeout used when an assembler is not given one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
