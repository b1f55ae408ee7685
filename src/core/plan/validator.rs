//! Plan Validator & Repairer
//!
//! Checks a Generator-drafted plan against the time-budget and
//! pedagogical constraints, repairs what it safely can, and reports
//! everything else as warnings. Pure: the candidate plan is never
//! mutated; a new (possibly repaired) plan value is returned alongside
//! the warnings produced.
//!
//! Repairs are conservative by construction — a repair is only applied
//! when it cannot break the per-day time budget. Ambiguous fixes (like
//! enlarging a block to hit the weak-topic time bonus) are reported, not
//! guessed.

use crate::core::catalog::{Priority, Section};

use super::fallback::fallback_plan;
use super::types::{ReviewBlock, StudyPlan};

/// A day may run over its nominal daily minutes by 15%. Stored as a
/// percentage so the ceiling is exact in integer minutes.
pub const DAILY_OVERRUN_PERCENT: u64 = 115;

/// Weak topics must receive at least this multiple of the plan's average
/// study-block minutes.
pub const WEAK_TOPIC_TIME_FACTOR: f64 = 1.2;

/// Weak topics must appear within the first `ceil(total_days * ratio)` days.
pub const EARLY_WINDOW_RATIO: f64 = 0.6;

/// Minimum distinct review blocks naming each weak topic.
pub const MIN_WEAK_TOPIC_REVIEWS: usize = 2;

/// Minutes for a review block inserted during repair.
pub const DEFAULT_REVIEW_MINUTES: u32 = 15;

// ============================================================================
// Constraints
// ============================================================================

/// Quantitative constraints a plan is validated against.
#[derive(Debug, Clone)]
pub struct PlanConstraints {
    pub daily_minutes: u32,
    pub total_days: u32,
    /// Normalized weak topics (output of the topic parser).
    pub weak_topics: Vec<String>,
}

// ============================================================================
// Validator
// ============================================================================

/// Validates and repairs a candidate plan against [`PlanConstraints`],
/// resolving study-block priorities through the section catalog.
pub struct PlanValidator<'a> {
    constraints: &'a PlanConstraints,
    catalog: &'a [Section],
}

impl<'a> PlanValidator<'a> {
    pub fn new(constraints: &'a PlanConstraints, catalog: &'a [Section]) -> Self {
        Self { constraints, catalog }
    }

    /// Run every check, returning the repaired plan and the warnings
    /// produced. A structurally unusable candidate (zero days) is
    /// discarded in favor of the fallback plan.
    pub fn validate(&self, candidate: &StudyPlan) -> (StudyPlan, Vec<String>) {
        if candidate.days.is_empty() {
            log::warn!("Candidate plan has zero days; substituting fallback plan");
            let plan = fallback_plan(self.catalog, self.constraints);
            let warnings = plan.warnings.clone();
            return (plan, warnings);
        }

        let mut plan = candidate.clone();
        let mut warnings = Vec::new();

        self.enforce_daily_budget(&mut plan, &mut warnings);
        self.enforce_early_placement(&mut plan, &mut warnings);
        self.check_time_bonus(&plan, &mut warnings);
        self.enforce_review_coverage(&mut plan, &mut warnings);
        self.check_terminal_review(&plan, &mut warnings);

        plan.warnings.extend(warnings.iter().cloned());
        (plan, warnings)
    }

    /// Maximum minutes a day may carry: `floor(daily_minutes * 1.15)`,
    /// exact because day totals are whole minutes.
    fn max_daily(&self) -> u32 {
        (self.constraints.daily_minutes as u64 * DAILY_OVERRUN_PERCENT / 100) as u32
    }

    /// First `ceil(total_days * 0.6)` days, by day number.
    fn early_window(&self) -> u32 {
        (self.constraints.total_days as f64 * EARLY_WINDOW_RATIO).ceil() as u32
    }

    // ------------------------------------------------------------------
    // Time budget
    // ------------------------------------------------------------------

    /// Move the lowest-priority study blocks of overloaded days to the
    /// nearest following day with slack. A day that cannot be relieved is
    /// left unchanged and reported.
    fn enforce_daily_budget(&self, plan: &mut StudyPlan, warnings: &mut Vec<String>) {
        let budget = self.max_daily();

        for i in 0..plan.days.len() {
            loop {
                let total = plan.days[i].estimated_total_minutes;
                if total <= budget {
                    break;
                }

                let overage = total.saturating_sub(self.constraints.daily_minutes);
                let Some(block_idx) = self.lowest_priority_block(&plan.days[i]) else {
                    warnings.push(format!(
                        "Day {} is {overage} minutes over the {}-minute daily budget and has no study block to move",
                        plan.days[i].day, self.constraints.daily_minutes
                    ));
                    break;
                };

                let block_min = plan.days[i].study_blocks[block_idx].estimated_minutes;
                let target = (i + 1..plan.days.len())
                    .find(|&j| plan.days[j].estimated_total_minutes + block_min <= budget);

                match target {
                    Some(j) => {
                        let block = plan.days[i].study_blocks.remove(block_idx);
                        log::info!(
                            "Moving block {:?} from day {} to day {} to meet the time budget",
                            block.section_title,
                            plan.days[i].day,
                            plan.days[j].day
                        );
                        plan.days[j].study_blocks.push(block);
                        plan.days[i].recompute_total();
                        plan.days[j].recompute_total();
                    }
                    None => {
                        warnings.push(format!(
                            "Day {} is {overage} minutes over the {}-minute daily budget and no later day has slack",
                            plan.days[i].day, self.constraints.daily_minutes
                        ));
                        break;
                    }
                }
            }
        }
    }

    /// Index of the study block to move first: worst catalog priority,
    /// largest duration among ties. Blocks whose sections are unknown to
    /// the catalog rank as `important`.
    fn lowest_priority_block(&self, day: &super::types::Day) -> Option<usize> {
        day.study_blocks
            .iter()
            .enumerate()
            .max_by_key(|(_, b)| (self.block_priority(b), b.estimated_minutes))
            .map(|(idx, _)| idx)
    }

    /// A block ranks by the most important section it covers, so a block
    /// carrying any core material moves last.
    fn block_priority(&self, block: &super::types::StudyBlock) -> Priority {
        block
            .section_ids
            .iter()
            .filter_map(|id| self.catalog.iter().find(|s| s.id == *id))
            .map(|s| s.priority)
            .min()
            .unwrap_or(Priority::Important)
    }

    // ------------------------------------------------------------------
    // Weak-topic early placement
    // ------------------------------------------------------------------

    /// Swap late weak-topic blocks into the early window when both
    /// affected days stay within budget afterwards.
    fn enforce_early_placement(&self, plan: &mut StudyPlan, warnings: &mut Vec<String>) {
        let early_window = self.early_window();
        let budget = self.max_daily();

        for topic in &self.constraints.weak_topics {
            let placed_early = plan
                .days
                .iter()
                .filter(|d| d.day <= early_window)
                .any(|d| d.mentions_topic(topic));
            if placed_early {
                continue;
            }

            let located = plan.days.iter().enumerate().find_map(|(di, day)| {
                day.study_blocks
                    .iter()
                    .position(|b| b.mentions(topic))
                    .map(|bi| (di, bi))
            });
            let Some((src_di, src_bi)) = located else {
                warnings.push(format!(
                    "Weak topic \"{topic}\" does not appear in any study block of the plan"
                ));
                continue;
            };

            let src_min = plan.days[src_di].study_blocks[src_bi].estimated_minutes as i64;
            let mut swapped = false;

            'search: for ei in 0..plan.days.len() {
                if plan.days[ei].day > early_window || ei == src_di {
                    continue;
                }
                for bi in 0..plan.days[ei].study_blocks.len() {
                    let cand = &plan.days[ei].study_blocks[bi];
                    // Never displace another weak topic out of the window.
                    if self.constraints.weak_topics.iter().any(|t| cand.mentions(t)) {
                        continue;
                    }
                    let cand_min = cand.estimated_minutes as i64;
                    let early_total =
                        plan.days[ei].estimated_total_minutes as i64 - cand_min + src_min;
                    let late_total =
                        plan.days[src_di].estimated_total_minutes as i64 - src_min + cand_min;
                    if early_total <= budget as i64 && late_total <= budget as i64 {
                        let src_block = plan.days[src_di].study_blocks[src_bi].clone();
                        let cand_block =
                            std::mem::replace(&mut plan.days[ei].study_blocks[bi], src_block);
                        plan.days[src_di].study_blocks[src_bi] = cand_block;
                        plan.days[ei].recompute_total();
                        plan.days[src_di].recompute_total();
                        log::info!(
                            "Swapped weak topic {topic:?} into day {}",
                            plan.days[ei].day
                        );
                        swapped = true;
                        break 'search;
                    }
                }
            }

            if !swapped {
                warnings.push(format!(
                    "Weak topic \"{topic}\" is not covered within the first {early_window} days and no time-compatible swap was found"
                ));
            }
        }
    }

    // ------------------------------------------------------------------
    // Weak-topic time bonus (report only)
    // ------------------------------------------------------------------

    /// Weak topics should receive at least 1.2x the average study-block
    /// minutes. Which block to enlarge is ambiguous, so this is never
    /// auto-repaired.
    fn check_time_bonus(&self, plan: &StudyPlan, warnings: &mut Vec<String>) {
        let study_minutes: Vec<u32> = plan.study_blocks().map(|b| b.estimated_minutes).collect();
        if study_minutes.is_empty() {
            return;
        }
        let avg = study_minutes.iter().map(|&m| m as f64).sum::<f64>() / study_minutes.len() as f64;
        let target = WEAK_TOPIC_TIME_FACTOR * avg;

        for topic in &self.constraints.weak_topics {
            let allotted: f64 = plan
                .study_blocks()
                .filter(|b| b.mentions(topic))
                .map(|b| b.estimated_minutes as f64)
                .sum::<f64>()
                + plan
                    .review_blocks()
                    .filter(|r| r.mentions(topic))
                    .map(|r| r.estimated_minutes as f64)
                    .sum::<f64>();

            if allotted < target {
                warnings.push(format!(
                    "Weak topic \"{topic}\" is allotted {allotted:.0} minutes, below the {target:.0}-minute emphasis target"
                ));
            }
        }
    }

    // ------------------------------------------------------------------
    // Weak-topic review coverage
    // ------------------------------------------------------------------

    /// Each weak topic needs at least two distinct review blocks; missing
    /// ones are inserted into the nearest day with slack after the
    /// topic's first appearance.
    fn enforce_review_coverage(&self, plan: &mut StudyPlan, warnings: &mut Vec<String>) {
        let budget = self.max_daily();

        for topic in &self.constraints.weak_topics {
            let mut count = plan.review_blocks().filter(|r| r.mentions(topic)).count();
            if count >= MIN_WEAK_TOPIC_REVIEWS {
                continue;
            }

            let first_day = plan
                .days
                .iter()
                .find(|d| d.mentions_topic(topic))
                .map(|d| d.day);

            for i in 0..plan.days.len() {
                if count >= MIN_WEAK_TOPIC_REVIEWS {
                    break;
                }
                let day = &plan.days[i];
                if let Some(fd) = first_day {
                    if day.day <= fd {
                        continue;
                    }
                }
                if day.review_blocks.iter().any(|r| r.mentions(topic)) {
                    continue;
                }
                if day.estimated_total_minutes + DEFAULT_REVIEW_MINUTES > budget {
                    continue;
                }

                plan.days[i].review_blocks.push(ReviewBlock {
                    source_days: first_day.map(|d| vec![d]).unwrap_or_default(),
                    topics: vec![topic.clone()],
                    estimated_minutes: DEFAULT_REVIEW_MINUTES,
                    tasks: vec![format!(
                        "Revisit {topic}: rework one example and summarize the pitfalls"
                    )],
                });
                plan.days[i].recompute_total();
                count += 1;
            }

            if count < MIN_WEAK_TOPIC_REVIEWS {
                warnings.push(format!(
                    "Weak topic \"{topic}\" is reviewed in {count} block(s); {MIN_WEAK_TOPIC_REVIEWS} are required and no day has slack for more"
                ));
            }
        }
    }

    // ------------------------------------------------------------------
    // Terminal review (report only)
    // ------------------------------------------------------------------

    /// One of the final two days must carry review time. Repairing would
    /// mean fabricating review content not grounded in any section, so
    /// this only warns.
    fn check_terminal_review(&self, plan: &StudyPlan, warnings: &mut Vec<String>) {
        let n = plan.days.len();
        let tail = &plan.days[n.saturating_sub(2)..];
        if !tail.iter().any(|d| d.review_minutes() > 0) {
            warnings.push(
                "Neither of the final two days includes review time; the plan should end with a global review".to_string(),
            );
        }
    }
}
