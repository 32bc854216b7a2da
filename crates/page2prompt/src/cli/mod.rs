//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the page2prompt binary.

mod commands;
mod context;
mod notes;
mod prompts;
mod shots;
mod styles;
mod subjects;

pub use commands::{Cli, Commands};
pub use notes::run_notes;
pub use prompts::run_prompts;
pub use shots::run_shots;
pub use styles::run_style_random;
pub use subjects::run_subjects;
