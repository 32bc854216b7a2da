//! Style catalogs for Page2Prompt.
//!
//! - [`StyleCatalog`]: editable prefix/suffix styles, plus a random style
//!   generator
//! - [`DirectorCatalog`]: read-only director reference styles

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod director;
mod random;

pub use catalog::StyleCatalog;
pub use director::{DirectorCatalog, NO_DIRECTOR};
pub use random::{random_style, random_style_with};
