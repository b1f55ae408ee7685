//! Section Catalog
//!
//! Canonical, ordered catalog of study sections parsed from raw structural
//! text extracted out of lecture material. The catalog is built once per
//! source document and read-only afterward; the planner feeds it to the
//! Generator as structural constraints and the validator uses it to resolve
//! study-block priorities.

mod builder;
mod types;

pub use builder::{
    SectionCatalogBuilder, CatalogError, DEFAULT_CHAPTER, DEFAULT_DIFFICULTY,
    DEFAULT_SECTION_MINUTES, MAX_TITLE_LEN,
};
pub use types::{Priority, Section};
