//! Shot lists for Page2Prompt.
//!
//! [`normalize`] turns parsed rows into shots with per-scene numbering.
//! The generators drive the completion gateway to propose a shot list,
//! write director's notes for every shot, and extract subjects.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extractor;
mod generator;
mod notes;
mod processor;
mod templates;

pub use extractor::{ExtractionOutcome, SubjectExtractor};
pub use generator::{ShotListGenerator, ShotListOutcome};
pub use notes::{DirectorNotesGenerator, NOTES_ERROR};
pub use processor::{normalize, renumber};

use std::time::Duration;

/// Gateway timeout used when a generator is not given one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
