//! Internal test suite: shared fixtures, hand-written collaborator mocks,
//! and property-based tests for the control-layer invariants.

pub mod common;
pub mod mocks;

mod property;
