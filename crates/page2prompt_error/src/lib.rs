//! Error types for Page2Prompt.
//!
//! This crate provides the foundation error types used throughout the Page2Prompt workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use page2prompt_error::{Page2PromptResult, RegistryError, RegistryErrorKind};
//!
//! fn add_subject(name: &str) -> Page2PromptResult<()> {
//!     Err(RegistryError::new(RegistryErrorKind::DuplicateKey(name.to_string())))?
//! }
//!
//! match add_subject("Alice") {
//!     Ok(()) => println!("Added"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod config;
mod error;
mod gateway;
mod json;
mod registry;
mod storage;

pub use codec::{CodecError, CodecErrorKind};
pub use config::ConfigError;
pub use error::{Page2PromptError, Page2PromptErrorKind, Page2PromptResult};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use json::JsonError;
pub use registry::{RegistryError, RegistryErrorKind};
pub use storage::{StorageError, StorageErrorKind};
