//! Tolerant parsers for completion text.
//!
//! Completion services answer in loosely structured text. The parsers here
//! turn that text into typed rows and never fail on a malformed row: the
//! row is dropped, logged, and counted in the returned [`ParseReport`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extraction;
mod paragraphs;
mod pipe;
mod report;
mod subjects;

pub use extraction::extract_json;
pub use paragraphs::split_paragraphs;
pub use pipe::{PipeRow, SHOT_FIELDS, parse_pipe_rows};
pub use report::ParseReport;
pub use subjects::{parse_name_description_lines, parse_subjects_json};
