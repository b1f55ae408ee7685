//! Request Orchestration
//!
//! Stateless per-request flows over the collaborator seams: Q&A, study
//! plan generation, and quiz generation. Each call is an independent pure
//! transformation over request-local data — no shared mutable state, no
//! cross-request ordering.

pub mod planner;
pub mod qa;
pub mod quiz;

pub use planner::{generate_plan, Level, PlanRequest, PlanResponse};
pub use qa::{answer_question, QaRequest, QaResponse};
pub use quiz::{generate_quiz, QuizRequest, QuizResponse, MAX_QUESTIONS, MIN_QUESTIONS};
