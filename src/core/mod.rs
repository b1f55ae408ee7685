//! Deterministic control layer around the two external collaborators
//! (content index, Generator): topic normalization, section cataloging,
//! retrieval control, plan validation, and quiz filtering.

pub mod catalog;
pub mod documents;
pub mod llm;
pub mod plan;
pub mod quiz;
pub mod retrieval;
pub mod search;
pub mod topics;
