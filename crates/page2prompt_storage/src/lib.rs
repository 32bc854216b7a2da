//! Persistence for Page2Prompt.
//!
//! Subjects, styles, director styles and shot lists are stored as CSV
//! tables with one canonical header per record type. Legacy headers are
//! migrated on read; writes always use the canonical form. Projects are
//! stored as pretty-printed JSON snapshots.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod project;
mod records;
mod schema;
mod table;

pub use project::{ProjectStore, ProjectSummary};
pub use records::TableRecord;
pub use schema::{DIRECTOR_STYLES, SHOTS, STYLES, SUBJECTS, Schema, SchemaRow};
pub use table::{DirectorStyleTable, ShotTable, StyleTable, SubjectTable, Table};
