//! Test Fixtures
//!
//! Canned catalogs, chunks, and plans shared across unit, property, and
//! service-flow tests.

#![allow(dead_code)]

use crate::core::catalog::{Priority, Section};
use crate::core::plan::{Day, PlanSummary, ReviewBlock, StudyBlock, StudyPlan};
use crate::core::search::{ChunkMetadata, ContextChunk};

/// A small algorithms-course catalog: two core sections, one important,
/// one optional.
pub fn sample_catalog() -> Vec<Section> {
    vec![
        Section {
            id: 1,
            chapter: "Sorting".to_string(),
            title: "Elementary sorts and loop invariants".to_string(),
            pages: (3, 9),
            difficulty: 1,
            priority: Priority::Core,
            estimated_minutes: 30,
        },
        Section {
            id: 2,
            chapter: "Sorting".to_string(),
            title: "Merge sort and recurrences".to_string(),
            pages: (10, 18),
            difficulty: 2,
            priority: Priority::Core,
            estimated_minutes: 45,
        },
        Section {
            id: 3,
            chapter: "Graphs".to_string(),
            title: "Breadth-first and depth-first search".to_string(),
            pages: (40, 52),
            difficulty: 2,
            priority: Priority::Important,
            estimated_minutes: 40,
        },
        Section {
            id: 4,
            chapter: "Appendix".to_string(),
            title: "Historical notes".to_string(),
            pages: (90, 92),
            difficulty: 1,
            priority: Priority::Optional,
            estimated_minutes: 15,
        },
    ]
}

/// Chunks mirroring the sample catalog's content.
pub fn sample_chunks() -> Vec<ContextChunk> {
    let entries: &[(&str, &str, u32, bool, bool)] = &[
        ("chunk_0", "Elementary sorts: bubble sort compares adjacent pairs.", 3, false, false),
        ("chunk_1", "for i in 1..n:\n  for j in 0..n-i:\n    swap if out of order", 5, true, false),
        ("chunk_2", "Merge sort recurrence T(n) = 2T(n/2) + n", 12, false, true),
        ("chunk_3", "Breadth-first search explores level by level.", 41, false, false),
    ];
    entries
        .iter()
        .map(|(id, text, page, code, math)| ContextChunk {
            chunk_id: id.to_string(),
            text: text.to_string(),
            metadata: ChunkMetadata {
                source_id: "doc-1".to_string(),
                page: *page,
                contains_code: *code,
                contains_math: *math,
            },
        })
        .collect()
}

/// Build a day with consistent totals from its blocks.
pub fn day(n: u32, focus: &str, study: Vec<StudyBlock>, review: Vec<ReviewBlock>) -> Day {
    let mut d = Day {
        day: n,
        focus: focus.to_string(),
        estimated_total_minutes: 0,
        study_blocks: study,
        review_blocks: review,
    };
    d.recompute_total();
    d
}

pub fn study_block(title: &str, section_ids: &[u32], minutes: u32) -> StudyBlock {
    StudyBlock {
        chapter: "Algorithms".to_string(),
        section_title: title.to_string(),
        section_ids: section_ids.to_vec(),
        estimated_minutes: minutes,
        tasks: vec![format!("Work through {title}")],
    }
}

pub fn review_block(topics: &[&str], minutes: u32) -> ReviewBlock {
    ReviewBlock {
        source_days: vec![1],
        topics: topics.iter().map(|t| t.to_string()).collect(),
        estimated_minutes: minutes,
        tasks: vec!["Redo one exercise per topic".to_string()],
    }
}

pub fn plan(days: Vec<Day>) -> StudyPlan {
    StudyPlan {
        summary: PlanSummary {
            total_days: days.len() as u32,
            total_estimated_minutes: days.iter().map(|d| d.estimated_total_minutes).sum(),
            ..Default::default()
        },
        days,
        warnings: Vec::new(),
    }
}
