//! Trait definitions for Page2Prompt.
//!
//! The generators and the prompt assembler talk to a language model only
//! through [`CompletionGateway`], and report bulk progress through
//! [`ProgressSink`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(test, feature = "testing"))]
mod mock;
mod traits;

#[cfg(any(test, feature = "testing"))]
pub use mock::{MockBehavior, MockGateway, MockResponse};
pub use traits::{CompletionGateway, NoProgress, ProgressSink, complete_within};
