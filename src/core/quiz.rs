//! Quiz Items & Question-Type Filter
//!
//! Practice-question models and the filter that enforces a homogeneous
//! batch. The Generator is told not to mix question types, but its output
//! is untrusted — mismatched items are dropped here and the shortfall is
//! reported to the caller as metadata rather than re-generated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Question Type
// ============================================================================

/// The two supported practice-question forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "open-ended")]
    OpenEnded,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::OpenEnded => "open-ended",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Quiz Item
// ============================================================================

/// One practice question as drafted by the Generator.
///
/// Fields beyond the common head are type-specific: `options`,
/// `correct_answer`, and `explanation` for multiple choice; `sample_answer`
/// and `key_points` for open-ended. All are optional at the parsing layer —
/// the filter keys off `question_type` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    #[serde(default)]
    pub question_number: u32,
    pub question_text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub page_reference: String,

    /// Multiple choice: option letter (A-D) to option text.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Open-ended: model answer and the points it should hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_points: Vec<String>,
}

/// Envelope shape the quiz prompt asks the Generator for.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizBatch {
    pub questions: Vec<QuizItem>,
}

// ============================================================================
// Filter
// ============================================================================

/// Outcome metadata from a type-filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub requested_type: QuestionType,
    /// Items of the requested type that survived.
    pub kept: usize,
    /// Items dropped for having the wrong type.
    pub removed: usize,
}

/// Keep only items of the requested type, preserving relative order.
pub fn filter_by_type(
    items: Vec<QuizItem>,
    requested: QuestionType,
) -> (Vec<QuizItem>, FilterReport) {
    let original = items.len();
    let kept: Vec<QuizItem> = items
        .into_iter()
        .filter(|q| q.question_type == requested)
        .collect();

    let report = FilterReport {
        requested_type: requested,
        kept: kept.len(),
        removed: original - kept.len(),
    };
    if report.removed > 0 {
        log::warn!(
            "Filtered out {} question(s) that were not {requested}",
            report.removed
        );
    }

    (kept, report)
}
