//! Page2Prompt - screenplay to image prompts
//!
//! Page2Prompt turns a screenplay into a shot list, keeps a registry of the
//! recurring people, places and props it mentions, and asks a completion
//! service for concise, normal and detailed image prompts per shot.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use page2prompt::{OpenAiGateway, PromptAssembler, PromptContext, PromptOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = OpenAiGateway::from_env("gpt-4o-mini")?;
//!     let assembler = PromptAssembler::new(gateway);
//!
//!     let context = PromptContext::default().with_shot_description("Ann waits on the dock");
//!     let bundle = assembler.generate(&context, &[], &PromptOptions::default()).await;
//!     println!("{}", bundle.concise);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `page2prompt_core` - records (subjects, shots, styles, prompt bundles)
//! - `page2prompt_interface` - `CompletionGateway` trait
//! - `page2prompt_error` - error types
//! - `page2prompt_codec` - parsing of completion text
//! - `page2prompt_subjects` - subject registry and reconciliation
//! - `page2prompt_shots` - shot lists, director's notes, subject extraction
//! - `page2prompt_styles` - style and director catalogs
//! - `page2prompt_prompts` - prompt assembly
//! - `page2prompt_models` - OpenAI-compatible gateway
//! - `page2prompt_storage` - CSV tables and project snapshots
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{GatewaySettings, Page2PromptConfig, StorageSettings};

pub use page2prompt_codec::{
    ParseReport, PipeRow, SHOT_FIELDS, extract_json, parse_name_description_lines,
    parse_pipe_rows, parse_subjects_json, split_paragraphs,
};
pub use page2prompt_core::{
    AI_SUGGEST, CameraSettings, CameraSettingsBuilder, CompletionRequest, DirectorStyle,
    NOT_APPLICABLE, Project, PromptBundle, PromptLength, PromptSession, Shot, Style, Subject,
    SubjectKind, split_names,
};
pub use page2prompt_error::{
    CodecError, CodecErrorKind, ConfigError, GatewayError, GatewayErrorKind, JsonError,
    Page2PromptError, Page2PromptErrorKind, Page2PromptResult, RegistryError, RegistryErrorKind,
    StorageError, StorageErrorKind,
};
pub use page2prompt_interface::{CompletionGateway, NoProgress, ProgressSink, complete_within};
pub use page2prompt_models::OpenAiGateway;
pub use page2prompt_prompts::{
    PROMPT_ERROR_PREFIX, PromptAssembler, PromptContext, PromptOptions, wrap_prompt,
};
pub use page2prompt_shots::{
    DirectorNotesGenerator, ExtractionOutcome, NOTES_ERROR, ShotListGenerator, ShotListOutcome,
    SubjectExtractor, normalize, renumber,
};
pub use page2prompt_storage::{
    DirectorStyleTable, ProjectStore, ProjectSummary, ShotTable, StyleTable, SubjectTable, Table,
    TableRecord,
};
pub use page2prompt_styles::{DirectorCatalog, NO_DIRECTOR, StyleCatalog, random_style};
pub use page2prompt_subjects::{
    SubjectRegistry, apply_alias, ensure_coverage, extract_unique_names, extract_unique_places,
    replace_on_conflict,
};
