//! Fallback Plan
//!
//! Deterministic minimal schedule substituted when the Generator's draft
//! is structurally unusable. Spreads the catalog's core-priority sections
//! evenly across the available days at the full daily budget — imperfect,
//! but grounded in real sections and always well-formed.

use crate::core::catalog::{Priority, Section};

use super::types::{Day, PlanSummary, StudyBlock, StudyPlan};
use super::validator::PlanConstraints;

/// Build the fallback plan. `days.len()` always equals
/// `constraints.total_days`; days beyond the available sections carry a
/// generic review block.
pub fn fallback_plan(catalog: &[Section], constraints: &PlanConstraints) -> StudyPlan {
    let core: Vec<&Section> = catalog
        .iter()
        .filter(|s| s.priority == Priority::Core)
        .collect();
    let sections: Vec<&Section> = if core.is_empty() {
        catalog.iter().collect()
    } else {
        core
    };

    let total_days = constraints.total_days.max(1) as usize;
    let per_day = sections.len().div_ceil(total_days.max(1)).max(1);

    let days: Vec<Day> = (0..total_days)
        .map(|i| {
            let slice: Vec<&Section> = sections
                .iter()
                .skip(i * per_day)
                .take(per_day)
                .copied()
                .collect();

            let (focus, study_blocks) = if slice.is_empty() {
                (
                    format!("Study day {}: review lecture materials", i + 1),
                    vec![StudyBlock {
                        chapter: "General".to_string(),
                        section_title: "Review lecture materials".to_string(),
                        section_ids: vec![],
                        estimated_minutes: constraints.daily_minutes,
                        tasks: vec![
                            "Review lecture materials".to_string(),
                            "Take notes".to_string(),
                            "Practice problems".to_string(),
                        ],
                    }],
                )
            } else {
                let minutes_each = (constraints.daily_minutes / slice.len() as u32).max(1);
                let blocks = slice
                    .iter()
                    .map(|s| StudyBlock {
                        chapter: s.chapter.clone(),
                        section_title: s.title.clone(),
                        section_ids: vec![s.id],
                        estimated_minutes: minutes_each,
                        tasks: vec![
                            format!("Read pages {}-{} ({})", s.pages.0, s.pages.1, s.title),
                            "Write a three-bullet summary".to_string(),
                        ],
                    })
                    .collect();
                (slice[0].chapter.clone(), blocks)
            };

            let mut day = Day {
                day: (i + 1) as u32,
                focus,
                estimated_total_minutes: 0,
                study_blocks,
                review_blocks: vec![],
            };
            day.recompute_total();
            day
        })
        .collect();

    let topics_covered: Vec<String> = {
        let mut seen = indexmap::IndexSet::new();
        for s in &sections {
            seen.insert(s.chapter.clone());
        }
        seen.into_iter().collect()
    };

    StudyPlan {
        summary: PlanSummary {
            total_days: constraints.total_days,
            total_estimated_minutes: days.iter().map(|d| d.estimated_total_minutes).sum(),
            topics_covered,
            review_days: 0,
            plan_style: "Fallback plan".to_string(),
            notes: "Plan generation failed; a fallback schedule covering core sections was substituted.".to_string(),
        },
        days,
        warnings: vec![
            "Plan generation failed. Using a fallback schedule spread evenly over the available days.".to_string(),
        ],
    }
}
