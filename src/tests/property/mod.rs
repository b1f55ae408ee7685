//! Property-based tests for the control layer
//!
//! Property tests verify invariants that should hold for all inputs,
//! rather than testing specific cases.
//!
//! ## Test Modules
//!
//! - `topic_parser_props`: Topic parser totality and dedup invariants
//!   - Never panics on any input
//!   - Output fragments are trimmed and non-empty
//!   - Output contains no duplicates, first-seen order preserved
//!   - Re-parsing the joined output is a fixed point
//!
//! - `tier_classifier_props`: Retrieval tier classifier determinism
//!   - Total on any input
//!   - Comprehensive keywords always win over comparison keywords
//!   - Classification is stable under case changes
//!
//! - `sampler_props`: Diverse context sampler contracts
//!   - Deduplicated results never repeat a chunk id
//!   - Budget is never exceeded
//!
//! - `plan_validator_props`: Plan validator purity and idempotence
//!   - The input plan is never mutated
//!   - Repairs never push a day over the overrun ceiling
//!   - A constraint-satisfying plan validates to itself with no warnings
//!
//! By default, proptest runs 256 cases per property; tune with the
//! `PROPTEST_CASES` environment variable.

mod plan_validator_props;
mod sampler_props;
mod tier_classifier_props;
mod topic_parser_props;
