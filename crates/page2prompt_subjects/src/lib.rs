//! Subject registry for Page2Prompt.
//!
//! [`SubjectRegistry`] owns the canonical list of people, places and props
//! for a session. The free functions in this crate are the reconciliation
//! rules it is built on and can be applied to plain subject lists.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alias;
mod reconcile;
mod registry;

pub use alias::apply_alias;
pub use reconcile::{ensure_coverage, extract_unique_names, extract_unique_places, replace_on_conflict};
pub use registry::SubjectRegistry;
