//! Study Plan Types
//!
//! Serde models for the day-by-day schedule. These double as the schema
//! for the Generator's structured output: parsing is deliberately lenient
//! on decorative fields (tasks, notes) and strict on the numeric fields
//! the validator reasons about, so a draft missing minutes fails parsing
//! and triggers the fallback rather than silently validating garbage.

use serde::{Deserialize, Serialize};

// ============================================================================
// Blocks
// ============================================================================

/// A contiguous chunk of new-material study within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StudyBlock {
    #[serde(default)]
    pub chapter: String,
    #[serde(default)]
    pub section_title: String,
    /// Catalog section ids this block covers.
    #[serde(default)]
    pub section_ids: Vec<u32>,
    pub estimated_minutes: u32,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl StudyBlock {
    /// Case-insensitive check whether a topic names this block.
    pub fn mentions(&self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        self.section_title.to_lowercase().contains(&topic)
            || self.chapter.to_lowercase().contains(&topic)
    }
}

/// A spaced-review chunk revisiting earlier material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReviewBlock {
    /// Days whose material this review revisits.
    #[serde(default)]
    pub source_days: Vec<u32>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub estimated_minutes: u32,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl ReviewBlock {
    /// Case-insensitive check whether a topic is named by this block.
    pub fn mentions(&self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        self.topics.iter().any(|t| t.to_lowercase().contains(&topic))
    }
}

// ============================================================================
// Day
// ============================================================================

/// One 1-indexed day of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub day: u32,
    #[serde(default)]
    pub focus: String,
    pub estimated_total_minutes: u32,
    #[serde(default)]
    pub study_blocks: Vec<StudyBlock>,
    #[serde(default)]
    pub review_blocks: Vec<ReviewBlock>,
}

impl Day {
    /// Sum of this day's block minutes (study + review).
    pub fn block_minutes(&self) -> u32 {
        let study: u32 = self.study_blocks.iter().map(|b| b.estimated_minutes).sum();
        let review: u32 = self.review_blocks.iter().map(|b| b.estimated_minutes).sum();
        study + review
    }

    /// Sum of this day's review-block minutes.
    pub fn review_minutes(&self) -> u32 {
        self.review_blocks.iter().map(|b| b.estimated_minutes).sum()
    }

    /// Reset the stated day total to the recomputed block sum. Called
    /// after every repair that touches this day's blocks.
    pub fn recompute_total(&mut self) {
        self.estimated_total_minutes = self.block_minutes();
    }

    /// Whether a topic is named by this day's focus or any study block.
    pub fn mentions_topic(&self, topic: &str) -> bool {
        self.focus.to_lowercase().contains(&topic.to_lowercase())
            || self.study_blocks.iter().any(|b| b.mentions(topic))
    }
}

// ============================================================================
// Plan
// ============================================================================

/// Plan-level rollup shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlanSummary {
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub total_estimated_minutes: u32,
    #[serde(default)]
    pub topics_covered: Vec<String>,
    #[serde(default)]
    pub review_days: u32,
    #[serde(default)]
    pub plan_style: String,
    #[serde(default)]
    pub notes: String,
}

/// A complete day-by-day study schedule.
///
/// Immutable once returned: validation produces a new plan value (or the
/// same one unchanged) plus a warnings list, never an in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    #[serde(default)]
    pub summary: PlanSummary,
    pub days: Vec<Day>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl StudyPlan {
    /// All study blocks across all days, in plan order.
    pub fn study_blocks(&self) -> impl Iterator<Item = &StudyBlock> {
        self.days.iter().flat_map(|d| d.study_blocks.iter())
    }

    /// All review blocks across all days, in plan order.
    pub fn review_blocks(&self) -> impl Iterator<Item = &ReviewBlock> {
        self.days.iter().flat_map(|d| d.review_blocks.iter())
    }
}
