//! Property-based tests for the Plan Validator
//!
//! Tests invariants:
//! - Purity: the candidate plan is never mutated
//! - Repairs never push a day past the overrun ceiling it was under
//! - Idempotence: a constraint-satisfying plan validates to itself with
//!   no warnings
//! - The fallback path always yields exactly `total_days` days

use proptest::prelude::*;

use crate::core::plan::{
    Day, PlanConstraints, PlanSummary, PlanValidator, ReviewBlock, StudyBlock, StudyPlan,
};
use crate::tests::common::fixtures::sample_catalog;

const TITLES: &[&str] = &[
    "Elementary sorts",
    "Merge sort and recurrences",
    "Breadth-first search",
    "Hash tables",
    "Dynamic programming",
];

fn arb_study_block() -> impl Strategy<Value = StudyBlock> {
    (0usize..TITLES.len(), 10u32..120, prop::option::of(1u32..5)).prop_map(
        |(title, minutes, section)| StudyBlock {
            chapter: "Algorithms".to_string(),
            section_title: TITLES[title].to_string(),
            section_ids: section.into_iter().collect(),
            estimated_minutes: minutes,
            tasks: vec!["Work through the material".to_string()],
        },
    )
}

fn arb_review_block() -> impl Strategy<Value = ReviewBlock> {
    (0usize..TITLES.len(), 5u32..25).prop_map(|(title, minutes)| ReviewBlock {
        source_days: vec![1],
        topics: vec![TITLES[title].to_string()],
        estimated_minutes: minutes,
        tasks: vec!["Redo one exercise".to_string()],
    })
}

fn arb_plan() -> impl Strategy<Value = StudyPlan> {
    prop::collection::vec(
        (
            prop::collection::vec(arb_study_block(), 0..4),
            prop::collection::vec(arb_review_block(), 0..3),
        ),
        1..5,
    )
    .prop_map(|days| {
        let days: Vec<Day> = days
            .into_iter()
            .enumerate()
            .map(|(i, (study, review))| {
                let mut day = Day {
                    day: (i + 1) as u32,
                    focus: format!("Day {} focus", i + 1),
                    estimated_total_minutes: 0,
                    study_blocks: study,
                    review_blocks: review,
                };
                day.recompute_total();
                day
            })
            .collect();
        StudyPlan {
            summary: PlanSummary {
                total_days: days.len() as u32,
                ..Default::default()
            },
            days,
            warnings: Vec::new(),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn validation_never_mutates_its_input(
        plan in arb_plan(),
        daily in 60u32..=180,
    ) {
        let constraints = PlanConstraints {
            daily_minutes: daily,
            total_days: plan.days.len() as u32,
            weak_topics: vec!["merge sort".to_string()],
        };
        let catalog = sample_catalog();
        let validator = PlanValidator::new(&constraints, &catalog);

        let snapshot = plan.clone();
        let _ = validator.validate(&plan);
        prop_assert_eq!(plan, snapshot);
    }

    #[test]
    fn repairs_respect_the_overrun_ceiling(plan in arb_plan(), daily in 60u32..=180) {
        let constraints = PlanConstraints {
            daily_minutes: daily,
            total_days: plan.days.len() as u32,
            weak_topics: vec![],
        };
        let catalog = sample_catalog();
        let validator = PlanValidator::new(&constraints, &catalog);
        let ceiling = (daily as u64 * 115 / 100) as u32;

        let (out, _) = validator.validate(&plan);
        for (before, after) in plan.days.iter().zip(out.days.iter()) {
            // A day that was within the ceiling must stay within it.
            if before.estimated_total_minutes <= ceiling {
                prop_assert!(
                    after.estimated_total_minutes <= ceiling,
                    "day {} went from {} to {} (ceiling {})",
                    before.day,
                    before.estimated_total_minutes,
                    after.estimated_total_minutes,
                    ceiling
                );
            }
        }
    }

    #[test]
    fn satisfying_plans_validate_unchanged(plan in arb_plan()) {
        // Make the generated plan constraint-satisfying by construction:
        // a daily budget no day exceeds, review time on the final day,
        // and no weak topics to place.
        let mut plan = plan;
        let last = plan.days.last_mut().unwrap();
        if last.review_minutes() == 0 {
            last.review_blocks.push(ReviewBlock {
                source_days: vec![1],
                topics: vec!["earlier material".to_string()],
                estimated_minutes: 15,
                tasks: vec!["Global review".to_string()],
            });
            last.recompute_total();
        }
        let daily = plan
            .days
            .iter()
            .map(|d| d.estimated_total_minutes)
            .max()
            .unwrap()
            .max(30);
        let constraints = PlanConstraints {
            daily_minutes: daily,
            total_days: plan.days.len() as u32,
            weak_topics: vec![],
        };
        let catalog = sample_catalog();
        let validator = PlanValidator::new(&constraints, &catalog);

        let (out, warnings) = validator.validate(&plan);
        prop_assert!(warnings.is_empty(), "warnings: {warnings:?}");
        prop_assert_eq!(out, plan);
    }

    #[test]
    fn fallback_always_fills_total_days(total_days in 1u32..10, daily in 30u32..=180) {
        let constraints = PlanConstraints {
            daily_minutes: daily,
            total_days,
            weak_topics: vec![],
        };
        let catalog = sample_catalog();
        let validator = PlanValidator::new(&constraints, &catalog);

        let empty = StudyPlan {
            summary: PlanSummary::default(),
            days: vec![],
            warnings: vec![],
        };
        let (out, warnings) = validator.validate(&empty);
        prop_assert_eq!(out.days.len() as u32, total_days);
        prop_assert!(!warnings.is_empty());
    }
}
