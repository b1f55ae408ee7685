//! Study Plan
//!
//! The schedule data model produced for a learner, plus the validator
//! that checks a Generator-drafted plan against quantitative pedagogical
//! constraints, repairs what it safely can, and substitutes a
//! deterministic fallback when the draft is structurally unusable.

mod fallback;
mod types;
mod validator;

pub use fallback::fallback_plan;
pub use types::{Day, PlanSummary, ReviewBlock, StudyBlock, StudyPlan};
pub use validator::{
    PlanConstraints, PlanValidator, DAILY_OVERRUN_PERCENT, DEFAULT_REVIEW_MINUTES,
    EARLY_WINDOW_RATIO, MIN_WEAK_TOPIC_REVIEWS, WEAK_TOPIC_TIME_FACTOR,
};
