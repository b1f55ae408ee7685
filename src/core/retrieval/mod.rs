//! Retrieval Control
//!
//! Deterministic control over how much and which context is pulled from
//! the content index: question-breadth classification into a chunk-count
//! tier, and diverse multi-query sampling under a dedup/budget contract.

mod sampler;
mod tier;

pub use sampler::{sample, sample_diverse, DIVERSE_QUERIES};
pub use tier::{classify, RetrievalTier};
