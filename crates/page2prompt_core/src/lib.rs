//! Core record types for Page2Prompt.
//!
//! This crate provides the value objects passed between the codec, the
//! registries and the prompt assembler: subjects, shots, styles, camera
//! settings, prompt bundles, completion requests and project snapshots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod camera;
mod project;
mod prompt;
mod request;
mod shot;
mod style;
mod subject;

pub use camera::{AI_SUGGEST, CameraSettings, CameraSettingsBuilder};
pub use project::Project;
pub use prompt::{PromptBundle, PromptLength, PromptSession};
pub use request::CompletionRequest;
pub use shot::{NOT_APPLICABLE, Shot, split_names};
pub use style::{DirectorStyle, Style};
pub use subject::{Subject, SubjectKind};
